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

use rsa::{traits::PublicKeyParts, BigUint, RsaPublicKey};
use x509_verify_der::{Content, DerElement, DerError, Oid, Tag};

use crate::raw_signature::{oids::RSA_ENCRYPTION, RawSignatureDecryptError, RawSignatureDecrypter};

// Largest modulus accepted, in bits.
const MAX_KEY_BITS: usize = 16384;

// PKCS #1 v1.5 requires at least eight padding octets.
const MIN_PADDING: usize = 8;

/// An `RsaDecrypter` applies the RSA public key operation to a signature and
/// strips PKCS #1 v1.5 type 1 padding (`00 01 FF..FF 00`) from the result.
#[derive(Clone, Copy, Debug, Default)]
pub struct RsaDecrypter;

impl RawSignatureDecrypter for RsaDecrypter {
    fn decrypt(
        &self,
        sig: &[u8],
        public_key: &[u8],
    ) -> Result<Vec<u8>, RawSignatureDecryptError> {
        let public_key = rsa_public_key(public_key)?;

        let k = public_key.size();
        if sig.len() != k {
            return Err(RawSignatureDecryptError::InvalidSignatureLength {
                expected: k,
                found: sig.len(),
            });
        }

        let s = BigUint::from_bytes_be(sig);
        if &s >= public_key.n() {
            return Err(RawSignatureDecryptError::SignatureOutOfRange);
        }

        let m = s.modpow(public_key.e(), public_key.n()).to_bytes_be();

        // left-pad to the modulus length
        let mut em = vec![0u8; k.saturating_sub(m.len())];
        em.extend_from_slice(&m);

        unpad(&em).map(<[u8]>::to_vec)
    }
}

fn unpad(em: &[u8]) -> Result<&[u8], RawSignatureDecryptError> {
    let [0x00, 0x01, rest @ ..] = em else {
        return Err(RawSignatureDecryptError::InvalidPadding);
    };

    let padding = rest.iter().take_while(|b| **b == 0xff).count();
    match rest.get(padding) {
        Some(0x00) if padding >= MIN_PADDING => Ok(&rest[padding + 1..]),
        _ => Err(RawSignatureDecryptError::InvalidPadding),
    }
}

// SubjectPublicKeyInfo ::= SEQUENCE { algorithm AlgorithmIdentifier, subjectPublicKey BIT STRING }
// RSAPublicKey ::= SEQUENCE { modulus INTEGER, publicExponent INTEGER }
fn rsa_public_key(spki: &[u8]) -> Result<RsaPublicKey, RawSignatureDecryptError> {
    let invalid = |_: DerError| RawSignatureDecryptError::InvalidPublicKey;

    let spki = DerElement::parse_exact(spki).map_err(invalid)?;
    let fields = spki
        .expect(Tag::SEQUENCE)
        .and_then(|spki| spki.children())
        .map_err(invalid)?;
    let [algorithm, key_bits] = &fields[..] else {
        return Err(RawSignatureDecryptError::InvalidPublicKey);
    };

    let key_alg = key_algorithm(algorithm)?;
    if key_alg.arcs() != RSA_ENCRYPTION {
        return Err(RawSignatureDecryptError::UnsupportedKeyType(key_alg.to_string()));
    }

    let key_bits = key_bits.expect(Tag::BIT_STRING).map_err(invalid)?;
    let Content::Primitive(key_der) = key_bits.content().map_err(invalid)? else {
        return Err(RawSignatureDecryptError::InvalidPublicKey);
    };

    let key = DerElement::parse_exact(key_der).map_err(invalid)?;
    let parts = key
        .expect(Tag::SEQUENCE)
        .and_then(|key| key.children())
        .map_err(invalid)?;
    let [modulus, exponent] = &parts[..] else {
        return Err(RawSignatureDecryptError::InvalidPublicKey);
    };

    let modulus = biguint_val(modulus)?;
    let exp = biguint_val(exponent)?;

    RsaPublicKey::new_with_max_size(modulus, exp, MAX_KEY_BITS)
        .map_err(|_| RawSignatureDecryptError::InvalidPublicKey)
}

fn key_algorithm(algorithm: &DerElement<'_>) -> Result<Oid, RawSignatureDecryptError> {
    let invalid = |_: DerError| RawSignatureDecryptError::InvalidPublicKey;

    let fields = algorithm
        .expect(Tag::SEQUENCE)
        .and_then(|algorithm| algorithm.children())
        .map_err(invalid)?;
    fields
        .first()
        .ok_or(RawSignatureDecryptError::InvalidPublicKey)?
        .as_oid()
        .map_err(invalid)
}

// Only non-negative INTEGERs make sense as key parts.
fn biguint_val(item: &DerElement<'_>) -> Result<BigUint, RawSignatureDecryptError> {
    match item.expect(Tag::INTEGER).and_then(|item| item.content()) {
        Ok(Content::Primitive(bytes)) if bytes.first().is_some_and(|b| b & 0x80 == 0) => {
            Ok(BigUint::from_bytes_be(bytes))
        }
        _ => Err(RawSignatureDecryptError::InvalidPublicKey),
    }
}
