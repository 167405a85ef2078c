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

use log::warn;

use crate::{Error, Result};

const CERTIFICATE_TAG: &str = "CERTIFICATE";

// Decode the body of the first CERTIFICATE block in `text`. Blocks with
// other labels are skipped.
pub(crate) fn certificate_der(text: &str, allow_bundles: bool) -> Result<Vec<u8>> {
    let blocks = pem::parse_many(text).map_err(|err| Error::InvalidCertificate(err.to_string()))?;

    let mut certificates = blocks
        .into_iter()
        .filter(|block| block.tag() == CERTIFICATE_TAG);

    let first = certificates
        .next()
        .ok_or_else(|| Error::InvalidCertificate("no CERTIFICATE block found".to_owned()))?;

    let count = 1 + certificates.count();
    if count > 1 {
        if !allow_bundles {
            return Err(Error::InvalidCertificate(format!(
                "expected one CERTIFICATE block, found {count}"
            )));
        }
        warn!("PEM input holds {count} certificates; using only the first one");
    }

    Ok(first.contents().to_vec())
}

pub(crate) fn encode_certificate(der: &[u8]) -> String {
    pem::encode(&pem::Pem::new(CERTIFICATE_TAG, der))
}
