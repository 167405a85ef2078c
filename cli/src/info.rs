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

use std::fmt::Write;

use anyhow::Result;
use x509_verify::Certificate;

/// display a summary of the certificate's signature fields
pub fn info(cert: &Certificate) -> Result<String> {
    let mut report = String::new();

    writeln!(report, "Certificate size = {} bytes", cert.as_der().len())?;
    writeln!(
        report,
        "Signed data size = {} bytes",
        cert.tbs_certificate_bytes().len()
    )?;
    writeln!(
        report,
        "Signature algorithm = {}",
        cert.signature_algorithm_oid()?
    )?;
    writeln!(
        report,
        "Signature size = {} bytes",
        cert.signature_bytes().len()
    )?;
    writeln!(
        report,
        "Public key algorithm = {}",
        cert.public_key_algorithm_oid()?
    )?;
    write!(report, "Self-signed = {}", self_signed(cert.is_signed_by(cert)))?;

    Ok(report)
}

// a failed self check is reported in place of the answer
fn self_signed(checked: x509_verify::Result<bool>) -> String {
    match checked {
        Ok(signed) => signed.to_string(),
        Err(err) => err.to_string(),
    }
}
