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

use thiserror::Error;
use x509_verify_der::Oid;

use crate::raw_signature::{oids::RSA_ENCRYPTION, RsaDecrypter};

/// A `RawSignatureDecrypter` implementation reverses a raw signature with a
/// public key and returns the padded-out payload that the signer encoded.
///
/// IMPORTANT: The returned bytes are only meaningful once checked against a
/// digest of the signed content. This trait does not do that check.
pub trait RawSignatureDecrypter {
    /// Apply the public key operation to `sig` using the DER-encoded
    /// `SubjectPublicKeyInfo` in `public_key`, strip the signature padding,
    /// and return what remains.
    fn decrypt(
        &self,
        sig: &[u8],
        public_key: &[u8],
    ) -> Result<Vec<u8>, RawSignatureDecryptError>;
}

/// Return a built-in decrypter for public keys of type `alg`, or `None` if
/// keys of that type cannot recover a signed payload.
pub fn decrypter_for_public_key_alg(alg: &Oid) -> Option<Box<dyn RawSignatureDecrypter>> {
    if alg.arcs() == RSA_ENCRYPTION {
        return Some(Box::new(RsaDecrypter));
    }

    None
}

/// Describes errors that can be identified when reversing a raw signature.
///
/// Apart from [`InvalidPublicKey`], each of these means the signature was not
/// produced by the key on hand.
///
/// [`InvalidPublicKey`]: RawSignatureDecryptError::InvalidPublicKey
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum RawSignatureDecryptError {
    /// The public key could not be decoded.
    #[error("invalid public key")]
    InvalidPublicKey,

    /// The public key is well formed but of a type this decrypter does not
    /// handle.
    #[error("unsupported key type {0}")]
    UnsupportedKeyType(String),

    /// The signature length does not match the key modulus.
    #[error("signature is {found} bytes; the key expects {expected}")]
    InvalidSignatureLength {
        /// Modulus size in bytes.
        expected: usize,

        /// Signature size in bytes.
        found: usize,
    },

    /// The signature, read as an integer, is not smaller than the modulus.
    #[error("signature value is out of range for the key")]
    SignatureOutOfRange,

    /// The recovered block does not carry the expected padding.
    #[error("invalid signature padding")]
    InvalidPadding,
}
