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

#![doc = include_str!("../README.md")]

use std::{
    path::{Path, PathBuf},
    process::exit,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use x509_verify::{Certificate, Settings};

mod info;
mod tree;

/// Check whether X.509 certificates were signed by candidate issuers.
#[derive(Debug, Parser)]
#[command(author, version, about, rename_all = "snake_case")]
pub struct CliArgs {
    /// Path to the certificate to check (PEM or DER).
    pub cert: PathBuf,

    /// Path to a candidate issuer certificate. May be repeated.
    #[clap(short, long)]
    pub issuer: Vec<PathBuf>,

    /// Path to a TOML settings file.
    #[clap(short, long, env = "X509VERIFY_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Print the DER structure of the certificate as a tree.
    #[clap(long)]
    pub tree: bool,

    /// Display a summary of the certificate.
    #[clap(long)]
    pub info: bool,
}

const PEM_PREFIX: &[u8] = b"-----BEGIN";

// Read a certificate that may be PEM or DER encoded.
fn load_certificate(path: &Path, settings: &Settings) -> Result<Certificate> {
    let bytes =
        std::fs::read(path).with_context(|| format!("could not read {}", path.display()))?;

    let is_pem = bytes
        .windows(PEM_PREFIX.len())
        .any(|window| window == PEM_PREFIX);

    let cert = if is_pem {
        let text = String::from_utf8_lossy(&bytes);
        Certificate::from_pem_with(&text, settings)
    } else {
        Certificate::from_der_with(&bytes, settings)
    };

    cert.with_context(|| format!("could not load certificate {}", path.display()))
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };

    let settings = Settings::from_file(path)
        .with_context(|| format!("could not load settings {}", path.display()))?;
    debug!("loaded settings from {}", path.display());
    Ok(settings)
}

fn main() -> Result<()> {
    let args = CliArgs::parse();

    // set RUST_LOG=debug to get detailed debug logging
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "error");
    }
    env_logger::init();

    let settings = load_settings(args.settings.as_deref())?;
    let cert = load_certificate(&args.cert, &settings)?;

    if args.info {
        println!("{}", info::info(&cert)?);
    }

    if args.tree {
        println!("{}", tree::tree(&cert, &settings)?);
    }

    if args.issuer.is_empty() {
        return Ok(());
    }

    let mut signed_by_any = false;
    for path in &args.issuer {
        let issuer = load_certificate(path, &settings)?;
        let signed = cert
            .is_signed_by(&issuer)
            .with_context(|| format!("could not check signature against {}", path.display()))?;

        println!(
            "{}: {}",
            path.display(),
            if signed { "signed" } else { "not signed" }
        );
        signed_by_any |= signed;
    }

    if !signed_by_any {
        exit(1);
    }
    Ok(())
}
