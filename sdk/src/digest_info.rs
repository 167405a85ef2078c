// Copyright 2025 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.

// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

use x509_verify_der::{Content, DerElement, DerError, DerSettings, Oid, Tag};

use crate::{hash::DigestAlgorithm, Error, Result};

/// The `DigestInfo` structure recovered from a PKCS #1 v1.5 signature.
///
/// ```text
/// DigestInfo ::= SEQUENCE {
///     digestAlgorithm AlgorithmIdentifier,
///     digest OCTET STRING }
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignatureDigestInfo {
    algorithm_oid: Oid,
    digest: Vec<u8>,
}

impl SignatureDigestInfo {
    /// Parse a `DigestInfo` with default decoder settings.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        Self::from_der_with(der, &DerSettings::default())
    }

    /// Parse a `DigestInfo`.
    ///
    /// Any structural problem, including trailing bytes after the outer
    /// `SEQUENCE`, is reported as [`Error::MalformedSignature`].
    pub fn from_der_with(der: &[u8], settings: &DerSettings) -> Result<Self> {
        let malformed = |err: DerError| Error::MalformedSignature(err.to_string());

        let digest_info = DerElement::parse_exact_with(der, settings).map_err(malformed)?;
        let fields = digest_info
            .expect(Tag::SEQUENCE)
            .and_then(|digest_info| digest_info.children())
            .map_err(malformed)?;

        let [algorithm, digest] = &fields[..] else {
            return Err(Error::MalformedSignature(format!(
                "DigestInfo has {} fields, expected 2",
                fields.len()
            )));
        };

        // AlgorithmIdentifier ::= SEQUENCE { algorithm OID, parameters ANY OPTIONAL }
        let algorithm_fields = algorithm
            .expect(Tag::SEQUENCE)
            .and_then(|algorithm| algorithm.children())
            .map_err(malformed)?;

        let algorithm_oid = match &algorithm_fields[..] {
            [oid] | [oid, _] => oid.as_oid().map_err(malformed)?,
            _ => {
                return Err(Error::MalformedSignature(
                    "digest algorithm identifier is malformed".to_owned(),
                ))
            }
        };

        let digest = match digest.expect(Tag::OCTET_STRING).and_then(|d| d.content()) {
            Ok(Content::Primitive(bytes)) => bytes.to_vec(),
            Ok(_) => Vec::new(),
            Err(err) => return Err(malformed(err)),
        };

        Ok(Self {
            algorithm_oid,
            digest,
        })
    }

    /// The digest algorithm's object identifier as found in the signature.
    pub fn algorithm_oid(&self) -> &Oid {
        &self.algorithm_oid
    }

    /// The digest algorithm, if it is one this crate recognizes.
    ///
    /// Returns [`Error::UnsupportedAlgorithm`] otherwise.
    pub fn algorithm(&self) -> Result<DigestAlgorithm> {
        DigestAlgorithm::from_oid(&self.algorithm_oid)
            .ok_or_else(|| Error::UnsupportedAlgorithm(self.algorithm_oid.to_string()))
    }

    /// The digest value the signer computed over the signed data.
    pub fn digest(&self) -> &[u8] {
        &self.digest
    }
}
