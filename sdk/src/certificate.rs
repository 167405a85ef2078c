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

use std::ops::Range;

use log::debug;
use x509_verify_der::{Content, DerElement, DerError, DerSettings, Oid, Tag};

use crate::{
    hash::hash_by_alg,
    pem_utils,
    raw_signature::{
        decrypter_for_public_key_alg, RawSignatureDecryptError, RawSignatureDecrypter,
    },
    Error, Result, Settings, SignatureDigestInfo,
};

/// An X.509 certificate held in its DER encoding.
///
/// Construction checks that the encoding is a well-formed certificate and
/// records where its signed portion, signature algorithm, signature value,
/// and subject public key sit. The accessors below hand out slices of the
/// original encoding.
#[derive(Clone, Debug)]
pub struct Certificate {
    der: Vec<u8>,
    fields: Fields,
    der_settings: DerSettings,
}

// Byte ranges into `Certificate::der`.
#[derive(Clone, Debug)]
struct Fields {
    tbs_certificate: Range<usize>,
    signature_algorithm: Range<usize>,
    signature: Range<usize>,
    subject_public_key_info: Range<usize>,
}

impl Certificate {
    /// Read a PEM-encoded certificate with default settings.
    pub fn from_pem(text: &str) -> Result<Self> {
        Self::from_pem_with(text, &Settings::default())
    }

    /// Read a PEM-encoded certificate.
    ///
    /// The first `CERTIFICATE` block is used. If more follow, the input is
    /// rejected unless [`CertificateSettings::allow_bundles`] is set.
    ///
    /// [`CertificateSettings::allow_bundles`]: crate::CertificateSettings::allow_bundles
    pub fn from_pem_with(text: &str, settings: &Settings) -> Result<Self> {
        let der = pem_utils::certificate_der(text, settings.certificate.allow_bundles)?;
        Self::from_der_vec(der, &settings.der)
    }

    /// Read a DER-encoded certificate with default settings.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        Self::from_der_with(der, &Settings::default())
    }

    /// Read a DER-encoded certificate.
    pub fn from_der_with(der: &[u8], settings: &Settings) -> Result<Self> {
        Self::from_der_vec(der.to_vec(), &settings.der)
    }

    fn from_der_vec(der: Vec<u8>, der_settings: &DerSettings) -> Result<Self> {
        let fields = Fields::locate(&der, der_settings).map_err(|err| match err {
            Error::Der(err) => invalid(err),
            err => err,
        })?;
        check_x509(&der)?;

        Ok(Self {
            der,
            fields,
            der_settings: *der_settings,
        })
    }

    /// The complete DER encoding.
    pub fn as_der(&self) -> &[u8] {
        &self.der
    }

    /// The certificate re-wrapped as a PEM `CERTIFICATE` block.
    pub fn to_pem(&self) -> String {
        pem_utils::encode_certificate(&self.der)
    }

    /// The complete encoding (header included) of the `tbsCertificate`
    /// field. This is the data the issuer signed.
    pub fn tbs_certificate_bytes(&self) -> &[u8] {
        &self.der[self.fields.tbs_certificate.clone()]
    }

    /// The complete encoding of the outer `signatureAlgorithm` field.
    pub fn signature_algorithm_bytes(&self) -> &[u8] {
        &self.der[self.fields.signature_algorithm.clone()]
    }

    /// The object identifier of the outer `signatureAlgorithm` field.
    pub fn signature_algorithm_oid(&self) -> Result<Oid> {
        let algorithm =
            DerElement::parse_exact_with(self.signature_algorithm_bytes(), &self.der_settings)?;
        algorithm_identifier_oid(&algorithm)
    }

    /// The signature value with the BIT STRING's unused-bits octet removed.
    pub fn signature_bytes(&self) -> &[u8] {
        &self.der[self.fields.signature.clone()]
    }

    /// The complete encoding of the subject's `SubjectPublicKeyInfo`.
    pub fn subject_public_key_info(&self) -> &[u8] {
        &self.der[self.fields.subject_public_key_info.clone()]
    }

    /// The algorithm object identifier of the subject's public key.
    pub fn public_key_algorithm_oid(&self) -> Result<Oid> {
        let spki =
            DerElement::parse_exact_with(self.subject_public_key_info(), &self.der_settings)?;
        let fields = spki.children()?;
        let algorithm = fields.first().ok_or_else(|| {
            Error::InvalidCertificate("subject public key info is empty".to_owned())
        })?;

        algorithm_identifier_oid(algorithm)
    }

    /// Reverse this certificate's signature with `issuer`'s public key.
    ///
    /// Returns `Ok(None)` if the key rejects the signature or if keys of the
    /// issuer's type cannot recover a signed payload.
    pub fn decrypt_signature(&self, issuer: &Certificate) -> Result<Option<Vec<u8>>> {
        let key_alg = issuer.public_key_algorithm_oid()?;
        let Some(decrypter) = decrypter_for_public_key_alg(&key_alg) else {
            debug!("issuer key type {key_alg} cannot recover a signed digest");
            return Ok(None);
        };

        self.decrypt_signature_with(issuer, decrypter.as_ref())
    }

    /// Reverse this certificate's signature with `issuer`'s public key using
    /// `decrypter`.
    pub fn decrypt_signature_with(
        &self,
        issuer: &Certificate,
        decrypter: &dyn RawSignatureDecrypter,
    ) -> Result<Option<Vec<u8>>> {
        match decrypter.decrypt(self.signature_bytes(), issuer.subject_public_key_info()) {
            Ok(decrypted) => Ok(Some(decrypted)),
            Err(RawSignatureDecryptError::InvalidPublicKey) => Err(Error::InvalidPublicKey),
            Err(err) => {
                debug!("signature rejected by issuer key: {err}");
                Ok(None)
            }
        }
    }

    /// The `DigestInfo` recovered from this certificate's signature with
    /// `issuer`'s key, or `None` if the key rejects the signature.
    pub fn signature_digest_info(
        &self,
        issuer: &Certificate,
    ) -> Result<Option<SignatureDigestInfo>> {
        self.decrypt_signature(issuer)?
            .map(|decrypted| SignatureDigestInfo::from_der_with(&decrypted, &self.der_settings))
            .transpose()
    }

    /// Returns `true` if `issuer`'s public key produced this certificate's
    /// signature.
    ///
    /// Only the signature is checked. Names, validity periods, extensions,
    /// and revocation are not consulted.
    ///
    /// A signature that `issuer`'s key does not reproduce yields `Ok(false)`.
    /// Errors are reserved for inputs that cannot be judged: a malformed
    /// issuer key, a recovered payload that is not a `DigestInfo`, or a
    /// digest algorithm that is unknown or unavailable.
    pub fn is_signed_by(&self, issuer: &Certificate) -> Result<bool> {
        let decrypted = self.decrypt_signature(issuer)?;
        self.digest_matches(decrypted)
    }

    /// Like [`is_signed_by`], but reverses the signature with `decrypter`.
    ///
    /// [`is_signed_by`]: Certificate::is_signed_by
    pub fn is_signed_by_with(
        &self,
        issuer: &Certificate,
        decrypter: &dyn RawSignatureDecrypter,
    ) -> Result<bool> {
        let decrypted = self.decrypt_signature_with(issuer, decrypter)?;
        self.digest_matches(decrypted)
    }

    /// Return the positions in `candidates` of every certificate whose key
    /// produced this certificate's signature.
    pub fn find_issuers(&self, candidates: &[Certificate]) -> Result<Vec<usize>> {
        let mut issuers = Vec::new();
        for (index, candidate) in candidates.iter().enumerate() {
            if self.is_signed_by(candidate)? {
                issuers.push(index);
            }
        }
        Ok(issuers)
    }

    fn digest_matches(&self, decrypted: Option<Vec<u8>>) -> Result<bool> {
        let Some(decrypted) = decrypted else {
            return Ok(false);
        };

        let digest_info = SignatureDigestInfo::from_der_with(&decrypted, &self.der_settings)?;
        let alg = digest_info.algorithm()?;
        let digest = hash_by_alg(alg, self.tbs_certificate_bytes())?;

        let matches = digest == digest_info.digest();
        debug!("{alg} digest of signed data matches signature: {matches}");
        Ok(matches)
    }
}

impl PartialEq for Certificate {
    fn eq(&self, other: &Self) -> bool {
        self.der == other.der
    }
}

impl Eq for Certificate {}

impl Fields {
    // Certificate ::= SEQUENCE {
    //     tbsCertificate TBSCertificate,
    //     signatureAlgorithm AlgorithmIdentifier,
    //     signatureValue BIT STRING }
    fn locate(der: &[u8], settings: &DerSettings) -> Result<Self> {
        let certificate = DerElement::parse_exact_with(der, settings)?;
        let fields = certificate.expect(Tag::SEQUENCE).map_err(invalid)?.children()?;

        let [tbs_certificate, signature_algorithm, signature] = &fields[..] else {
            return Err(Error::InvalidCertificate(format!(
                "expected 3 top-level fields, found {}",
                fields.len()
            )));
        };

        tbs_certificate.expect(Tag::SEQUENCE).map_err(invalid)?;
        signature_algorithm.expect(Tag::SEQUENCE).map_err(invalid)?;
        signature.expect(Tag::BIT_STRING).map_err(invalid)?;

        let signature_end = signature.span().end;
        let signature_start = match signature.content()? {
            Content::Primitive(bits) => signature_end - bits.len(),
            _ => return Err(Error::InvalidCertificate("signature value is empty".to_owned())),
        };

        Ok(Self {
            tbs_certificate: tbs_certificate.span(),
            signature_algorithm: signature_algorithm.span(),
            signature: signature_start..signature_end,
            subject_public_key_info: locate_subject_public_key_info(tbs_certificate)?,
        })
    }
}

// TBSCertificate ::= SEQUENCE {
//     version [0] EXPLICIT Version DEFAULT v1,
//     serialNumber, signature, issuer, validity, subject,
//     subjectPublicKeyInfo, ... }
fn locate_subject_public_key_info(tbs_certificate: &DerElement<'_>) -> Result<Range<usize>> {
    let fields = tbs_certificate.children()?;

    let skip = match fields.first() {
        Some(version) if version.tag() == Tag::context_specific(0, true) => 1,
        _ => 0,
    };

    fields
        .get(skip + 5)
        .filter(|spki| spki.tag() == Tag::SEQUENCE)
        .map(|spki| spki.span())
        .ok_or_else(|| Error::InvalidCertificate("subject public key info not found".to_owned()))
}

// AlgorithmIdentifier ::= SEQUENCE { algorithm OID, parameters ANY OPTIONAL }
fn algorithm_identifier_oid(identifier: &DerElement<'_>) -> Result<Oid> {
    let fields = identifier.expect(Tag::SEQUENCE).map_err(invalid)?.children()?;
    let oid = fields
        .first()
        .ok_or_else(|| Error::InvalidCertificate("empty algorithm identifier".to_owned()))?
        .as_oid()
        .map_err(invalid)?;
    Ok(oid)
}

fn invalid(err: DerError) -> Error {
    Error::InvalidCertificate(err.to_string())
}

fn check_x509(der: &[u8]) -> Result<()> {
    match x509_parser::parse_x509_certificate(der) {
        Ok((rest, _)) if rest.is_empty() => Ok(()),
        Ok((rest, _)) => Err(Error::InvalidCertificate(format!(
            "{} bytes of trailing data",
            rest.len()
        ))),
        Err(err) => Err(Error::InvalidCertificate(err.to_string())),
    }
}
