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

//! Tools for reversing raw signatures with an issuer's public key.
//!
//! Signature schemes with message recovery (currently PKCS #1 v1.5 RSA) let
//! the holder of a public key recover the structure that was signed. The
//! [`RawSignatureDecrypter`] trait captures that step so that the digest
//! comparison in [`Certificate::is_signed_by`] can be tested independently.
//!
//! [`Certificate::is_signed_by`]: crate::Certificate::is_signed_by

mod decrypter;
pub use decrypter::{
    decrypter_for_public_key_alg, RawSignatureDecryptError, RawSignatureDecrypter,
};

pub(crate) mod oids;

mod rsa_decrypter;
pub use rsa_decrypter::RsaDecrypter;
