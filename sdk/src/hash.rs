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

//! Digest algorithms that can appear inside a PKCS #1 v1.5 signature.

use std::{fmt, str::FromStr};

use md2::Md2;
use md4::Md4;
use md5::Md5;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};
use x509_verify_der::Oid;

use crate::{Error, Result};

/// Describes the digest algorithms an issuer may have used.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum DigestAlgorithm {
    /// MD2 (`1.2.840.113549.2.2`)
    Md2,

    /// MD4 (`1.2.840.113549.2.4`)
    Md4,

    /// MD5 (`1.2.840.113549.2.5`)
    Md5,

    /// SHA-0 (`1.3.14.3.2.18`)
    Sha,

    /// SHA-1 (`1.3.14.3.2.26`)
    Sha1,

    /// SHA-256 (`2.16.840.1.101.3.4.2.1`)
    Sha256,

    /// SHA-384 (`2.16.840.1.101.3.4.2.2`)
    Sha384,

    /// SHA-512 (`2.16.840.1.101.3.4.2.3`)
    Sha512,
}

impl DigestAlgorithm {
    /// Every recognized algorithm.
    pub const ALL: [Self; 8] = [
        Self::Md2,
        Self::Md4,
        Self::Md5,
        Self::Sha,
        Self::Sha1,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
    ];

    /// Look up the algorithm identified by `oid`.
    pub fn from_oid(oid: &Oid) -> Option<Self> {
        Self::ALL.into_iter().find(|alg| alg.arcs() == oid.arcs())
    }

    /// The algorithm's object identifier.
    pub fn oid(self) -> Oid {
        Oid::new(self.arcs())
    }

    fn arcs(self) -> &'static [u64] {
        match self {
            Self::Md2 => &[1, 2, 840, 113549, 2, 2],
            Self::Md4 => &[1, 2, 840, 113549, 2, 4],
            Self::Md5 => &[1, 2, 840, 113549, 2, 5],
            Self::Sha => &[1, 3, 14, 3, 2, 18],
            Self::Sha1 => &[1, 3, 14, 3, 2, 26],
            Self::Sha256 => &[2, 16, 840, 1, 101, 3, 4, 2, 1],
            Self::Sha384 => &[2, 16, 840, 1, 101, 3, 4, 2, 2],
            Self::Sha512 => &[2, 16, 840, 1, 101, 3, 4, 2, 3],
        }
    }

    /// Size of the digest in bytes.
    pub fn output_len(self) -> usize {
        match self {
            Self::Md2 | Self::Md4 | Self::Md5 => 16,
            Self::Sha | Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }
}

impl FromStr for DigestAlgorithm {
    type Err = UnknownAlgorithmError;

    fn from_str(alg: &str) -> std::result::Result<Self, Self::Err> {
        match alg {
            "md2" => Ok(Self::Md2),
            "md4" => Ok(Self::Md4),
            "md5" => Ok(Self::Md5),
            "sha" => Ok(Self::Sha),
            "sha1" => Ok(Self::Sha1),
            "sha256" => Ok(Self::Sha256),
            "sha384" => Ok(Self::Sha384),
            "sha512" => Ok(Self::Sha512),
            _ => Err(UnknownAlgorithmError(alg.to_owned())),
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> std::result::Result<(), fmt::Error> {
        write!(
            f,
            "{}",
            match self {
                Self::Md2 => "md2",
                Self::Md4 => "md4",
                Self::Md5 => "md5",
                Self::Sha => "sha",
                Self::Sha1 => "sha1",
                Self::Sha256 => "sha256",
                Self::Sha384 => "sha384",
                Self::Sha512 => "sha512",
            }
        )
    }
}

#[derive(Debug, PartialEq, Eq)]
/// This error is thrown when converting from a string to [`DigestAlgorithm`]
/// if the algorithm string is unrecognized.
pub struct UnknownAlgorithmError(pub String);

impl fmt::Display for UnknownAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> std::result::Result<(), fmt::Error> {
        write!(f, "UnknownAlgorithmError({})", self.0)
    }
}

impl std::error::Error for UnknownAlgorithmError {}

/// Hash `data` with `alg`.
///
/// Returns [`Error::DigestUnavailable`] for SHA-0, which has no
/// implementation.
pub fn hash_by_alg(alg: DigestAlgorithm, data: &[u8]) -> Result<Vec<u8>> {
    Ok(match alg {
        DigestAlgorithm::Md2 => digest::<Md2>(data),
        DigestAlgorithm::Md4 => digest::<Md4>(data),
        DigestAlgorithm::Md5 => digest::<Md5>(data),
        DigestAlgorithm::Sha => return Err(Error::DigestUnavailable(alg)),
        DigestAlgorithm::Sha1 => digest::<Sha1>(data),
        DigestAlgorithm::Sha256 => digest::<Sha256>(data),
        DigestAlgorithm::Sha384 => digest::<Sha384>(data),
        DigestAlgorithm::Sha512 => digest::<Sha512>(data),
    })
}

fn digest<D: Digest>(data: &[u8]) -> Vec<u8> {
    D::digest(data).to_vec()
}
