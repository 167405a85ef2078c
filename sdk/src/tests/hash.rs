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

#![allow(clippy::unwrap_used)]

use x509_verify_der::Oid;

use crate::{
    hash::{hash_by_alg, DigestAlgorithm, UnknownAlgorithmError},
    Error,
};

#[test]
fn known_answers() {
    let vectors = [
        (DigestAlgorithm::Md2, "da853b0d3f88d99b30283a69e6ded6bb"),
        (DigestAlgorithm::Md4, "a448017aaf21d8525fc10ae87aa6729d"),
        (DigestAlgorithm::Md5, "900150983cd24fb0d6963f7d28e17f72"),
        (DigestAlgorithm::Sha1, "a9993e364706816aba3e25717850c26c9cd0d89d"),
        (
            DigestAlgorithm::Sha256,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        ),
        (
            DigestAlgorithm::Sha384,
            "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7",
        ),
        (
            DigestAlgorithm::Sha512,
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
        ),
    ];

    for (alg, expected) in vectors {
        let digest = hash_by_alg(alg, b"abc").unwrap();
        assert_eq!(hex::encode(&digest), expected, "{alg}");
        assert_eq!(digest.len(), alg.output_len(), "{alg}");
    }
}

#[test]
fn sha0_is_unavailable() {
    assert!(matches!(
        hash_by_alg(DigestAlgorithm::Sha, b"abc").unwrap_err(),
        Error::DigestUnavailable(DigestAlgorithm::Sha)
    ));
}

#[test]
fn oid_table() {
    let table = [
        ("1.2.840.113549.2.2", DigestAlgorithm::Md2),
        ("1.2.840.113549.2.4", DigestAlgorithm::Md4),
        ("1.2.840.113549.2.5", DigestAlgorithm::Md5),
        ("1.3.14.3.2.18", DigestAlgorithm::Sha),
        ("1.3.14.3.2.26", DigestAlgorithm::Sha1),
        ("2.16.840.1.101.3.4.2.1", DigestAlgorithm::Sha256),
        ("2.16.840.1.101.3.4.2.2", DigestAlgorithm::Sha384),
        ("2.16.840.1.101.3.4.2.3", DigestAlgorithm::Sha512),
    ];

    for (oid, alg) in table {
        let oid: Oid = oid.parse().unwrap();
        assert_eq!(DigestAlgorithm::from_oid(&oid), Some(alg));
        assert_eq!(alg.oid(), oid);
    }

    // sha256WithRSAEncryption names a signature algorithm, not a digest
    let oid: Oid = "1.2.840.113549.1.1.11".parse().unwrap();
    assert_eq!(DigestAlgorithm::from_oid(&oid), None);
}

#[test]
fn names() {
    for alg in DigestAlgorithm::ALL {
        assert_eq!(alg.to_string().parse::<DigestAlgorithm>().unwrap(), alg);
    }

    assert_eq!(
        "SHA256".parse::<DigestAlgorithm>().unwrap_err(),
        UnknownAlgorithmError("SHA256".to_owned())
    );
    assert_eq!(
        UnknownAlgorithmError("sha3".to_owned()).to_string(),
        "UnknownAlgorithmError(sha3)"
    );
}
