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
use x509_verify_der::DerError;

use crate::hash::DigestAlgorithm;

/// `Error` enumerates errors returned by certificate parsing and signature
/// checks.
///
/// A signature that simply was not produced by the issuer's key is not an
/// error; [`Certificate::is_signed_by`] reports it as `false`.
///
/// [`Certificate::is_signed_by`]: crate::Certificate::is_signed_by
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The input is not a single PEM-wrapped or DER-encoded X.509
    /// certificate.
    #[error("invalid certificate: {0}")]
    InvalidCertificate(String),

    /// The signature was reversed with the issuer's key but the result is
    /// not a `DigestInfo` structure.
    #[error("malformed signature: {0}")]
    MalformedSignature(String),

    /// The digest algorithm OID inside the signature is not one this crate
    /// knows about.
    #[error("unsupported digest algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The digest algorithm is recognized but cannot be computed.
    #[error("digest algorithm {0} is not available")]
    DigestUnavailable(DigestAlgorithm),

    /// The issuer's subject public key could not be decoded.
    #[error("invalid public key")]
    InvalidPublicKey,

    #[error(transparent)]
    #[allow(missing_docs)]
    Der(#[from] DerError),

    #[error("bad parameter: {0}")]
    #[allow(missing_docs)]
    BadParam(String),

    #[error(transparent)]
    #[allow(missing_docs)]
    IoError(#[from] std::io::Error),
}

/// A specialized `Result` type for certificate operations.
pub type Result<T> = std::result::Result<T, Error>;
