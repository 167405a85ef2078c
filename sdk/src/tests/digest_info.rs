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

use x509_verify_der::{DerSettings, Oid};

use crate::{
    hash::DigestAlgorithm,
    tests::{LEAF_DIGEST_INFO, LEAF_TBS_SHA256},
    Error, SignatureDigestInfo,
};

#[test]
fn sha256_digest_info() {
    let der = hex::decode(LEAF_DIGEST_INFO).unwrap();
    let digest_info = SignatureDigestInfo::from_der(&der).unwrap();

    assert_eq!(
        digest_info.algorithm_oid(),
        &"2.16.840.1.101.3.4.2.1".parse::<Oid>().unwrap()
    );
    assert_eq!(digest_info.algorithm().unwrap(), DigestAlgorithm::Sha256);
    assert_eq!(hex::encode(digest_info.digest()), LEAF_TBS_SHA256);
}

#[test]
fn parameters_are_optional() {
    // sha1 with the NULL parameters omitted
    let der = hex::decode("301f300706052b0e03021a0414a9993e364706816aba3e25717850c26c9cd0d89d")
        .unwrap();
    let digest_info = SignatureDigestInfo::from_der(&der).unwrap();

    assert_eq!(digest_info.algorithm().unwrap(), DigestAlgorithm::Sha1);
    assert_eq!(digest_info.digest().len(), 20);
}

#[test]
fn empty_digest() {
    let der = hex::decode("300d300906052b0e03021a05000400").unwrap();
    let digest_info = SignatureDigestInfo::from_der(&der).unwrap();
    assert!(digest_info.digest().is_empty());
}

#[test]
fn unknown_algorithm() {
    let der = hex::decode("300c300606022a0305000402aabb").unwrap();
    let digest_info = SignatureDigestInfo::from_der(&der).unwrap();

    assert_eq!(digest_info.algorithm_oid().to_string(), "1.2.3");
    assert!(matches!(
        digest_info.algorithm().unwrap_err(),
        Error::UnsupportedAlgorithm(oid) if oid == "1.2.3"
    ));
}

#[test]
fn malformed() {
    let mut trailing = hex::decode(LEAF_DIGEST_INFO).unwrap();
    trailing.push(0);

    let cases = [
        // empty input
        String::new(),
        // not a SEQUENCE
        "0400".to_owned(),
        // one field
        "30020500".to_owned(),
        // extra fields
        "3010300706052b0e03021a04000400020100".to_owned(),
        // algorithm identifier is not a SEQUENCE
        "300b06052b0e03021a0402aabb".to_owned(),
        // algorithm identifier without an OID
        "30083002050004020000".to_owned(),
        // algorithm identifier with too many fields
        "3011300b06052b0e03021a050005000402aabb".to_owned(),
        // digest is not an OCTET STRING
        "300d300906052b0e03021a05000500".to_owned(),
        // truncated
        LEAF_DIGEST_INFO[..40].to_owned(),
        hex::encode(&trailing),
    ];

    for case in cases {
        let der = hex::decode(&case).unwrap();
        assert!(
            matches!(
                SignatureDigestInfo::from_der(&der).unwrap_err(),
                Error::MalformedSignature(_)
            ),
            "input {case}"
        );
    }
}

#[test]
fn lax_lengths() {
    // outer length written in long form
    let der = hex::decode(
        "30811f300706052b0e03021a0414a9993e364706816aba3e25717850c26c9cd0d89d",
    )
    .unwrap();

    assert!(SignatureDigestInfo::from_der(&der).is_err());

    let lax = DerSettings {
        strict_lengths: false,
        ..Default::default()
    };
    let digest_info = SignatureDigestInfo::from_der_with(&der, &lax).unwrap();
    assert_eq!(digest_info.algorithm().unwrap(), DigestAlgorithm::Sha1);
}
