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

use crate::{DerElement, DerError, DerSettings};

fn octet_string(length_octets: &[u8], content_len: usize) -> Vec<u8> {
    let mut bytes = vec![0x04];
    bytes.extend_from_slice(length_octets);
    bytes.resize(bytes.len() + content_len, 0xAB);
    bytes
}

fn lax() -> DerSettings {
    DerSettings {
        strict_lengths: false,
        ..Default::default()
    }
}

#[test]
fn short_form() {
    let bytes = octet_string(&[0x7F], 127);
    let element = DerElement::parse(&bytes).unwrap();

    assert_eq!(element.header_len(), 2);
    assert_eq!(element.content_len(), 127);
}

#[test]
fn long_form() {
    let bytes = octet_string(&[0x81, 0x80], 128);
    let element = DerElement::parse(&bytes).unwrap();

    assert_eq!(element.header_len(), 3);
    assert_eq!(element.content_len(), 128);
    assert_eq!(element.content_range(), 3..131);

    let bytes = octet_string(&[0x82, 0x01, 0x00], 256);
    let element = DerElement::parse(&bytes).unwrap();

    assert_eq!(element.header_len(), 4);
    assert_eq!(element.content_len(), 256);
}

#[test]
fn indefinite_length_is_rejected() {
    let bytes = [0x30, 0x80, 0x05, 0x00, 0x00, 0x00];

    assert_eq!(
        DerElement::parse(&bytes).unwrap_err(),
        DerError::UnsupportedEncoding
    );
    assert_eq!(
        DerElement::parse_with(&bytes, &lax()).unwrap_err(),
        DerError::UnsupportedEncoding
    );
}

#[test]
fn nested_indefinite_length_is_rejected() {
    let bytes = [0x30, 0x04, 0x30, 0x80, 0x00, 0x00];
    let outer = DerElement::parse(&bytes).unwrap();

    assert_eq!(
        outer.children().unwrap_err(),
        DerError::UnsupportedEncoding
    );
}

#[test]
fn too_many_length_octets() {
    let mut bytes = vec![0x04, 0x89];
    bytes.extend_from_slice(&[0x01; 9]);

    assert_eq!(
        DerElement::parse(&bytes).unwrap_err(),
        DerError::InvalidLength
    );

    // 0xFF is reserved by X.690.
    assert_eq!(
        DerElement::parse(&[0x04, 0xFF, 0x00]).unwrap_err(),
        DerError::InvalidLength
    );
}

#[test]
fn huge_length_does_not_fit_buffer() {
    let bytes = [0x04, 0x88, 0x01, 0, 0, 0, 0, 0, 0, 0, 0xAB];
    let err = DerElement::parse(&bytes).unwrap_err();

    assert!(matches!(err, DerError::Truncated | DerError::InvalidLength));
}

#[test]
fn missing_length_octets() {
    assert_eq!(
        DerElement::parse(&[0x04]).unwrap_err(),
        DerError::Truncated
    );
    assert_eq!(
        DerElement::parse(&[0x04, 0x82, 0x01]).unwrap_err(),
        DerError::Truncated
    );
}

#[test]
fn long_form_for_short_length() {
    let bytes = octet_string(&[0x81, 0x05], 5);

    assert_eq!(
        DerElement::parse(&bytes).unwrap_err(),
        DerError::NonMinimalLength
    );

    let element = DerElement::parse_with(&bytes, &lax()).unwrap();
    assert_eq!(element.content_len(), 5);
    assert_eq!(element.header_len(), 3);
}

#[test]
fn leading_zero_length_octet() {
    let bytes = octet_string(&[0x82, 0x00, 0x80], 128);

    assert_eq!(
        DerElement::parse(&bytes).unwrap_err(),
        DerError::NonMinimalLength
    );

    let element = DerElement::parse_with(&bytes, &lax()).unwrap();
    assert_eq!(element.content_len(), 128);
    assert_eq!(element.header_len(), 4);
}

#[test]
fn non_minimal_child_length() {
    // The outer length is minimal, the inner one is not.
    let bytes = [0x30, 0x04, 0x04, 0x81, 0x01, 0xAB];
    let outer = DerElement::parse(&bytes).unwrap();

    assert_eq!(outer.children().unwrap_err(), DerError::NonMinimalLength);

    let outer = DerElement::parse_with(&bytes, &lax()).unwrap();
    assert_eq!(outer.children().unwrap()[0].raw_content(), &[0xAB]);
}
