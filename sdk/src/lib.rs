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

#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![deny(warnings)]
#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg, doc_cfg_hide))]

/// The DER decoder this crate is built on.
pub use x509_verify_der as der;

mod certificate;
pub use certificate::Certificate;

mod digest_info;
pub use digest_info::SignatureDigestInfo;

mod error;
pub use error::{Error, Result};

pub mod hash;
pub(crate) mod pem_utils;
pub mod raw_signature;

mod settings;
pub use settings::{CertificateSettings, Settings};

#[cfg(test)]
pub(crate) mod tests;
