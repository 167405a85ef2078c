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

use std::path::Path;

use serde::{Deserialize, Serialize};
use x509_verify_der::DerSettings;

use crate::{Error, Result};

// trait used to validate user input to make sure user supplied configurations are valid
pub(crate) trait SettingsValidate {
    // returns error if settings are invalid
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

impl SettingsValidate for DerSettings {
    fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(Error::BadParam("der.max_depth must be at least 1".into()));
        }
        Ok(())
    }
}

/// Settings for reading certificates.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CertificateSettings {
    /// Accept PEM input holding several certificates and use the first one.
    /// When `false`, such input is rejected.
    pub allow_bundles: bool,
}

impl Default for CertificateSettings {
    fn default() -> Self {
        Self {
            allow_bundles: true,
        }
    }
}

impl SettingsValidate for CertificateSettings {}

/// Configuration for decoding certificates and checking signatures.
///
/// Every field has a default, so a settings file only needs the values it
/// changes:
///
/// ```toml
/// [der]
/// max_depth = 32
///
/// [certificate]
/// allow_bundles = false
/// ```
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// DER decoder limits.
    pub der: DerSettings,

    /// Certificate intake options.
    pub certificate: CertificateSettings,
}

impl Settings {
    /// Load settings from a `.toml` file.
    pub fn from_file<P: AsRef<Path>>(setting_path: P) -> Result<Self> {
        let ext = setting_path
            .as_ref()
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase());

        if ext.as_deref() != Some("toml") {
            return Err(Error::BadParam("settings must be a .toml file".into()));
        }

        let settings_str = std::fs::read_to_string(&setting_path)?;
        Self::from_toml(&settings_str)
    }

    /// Parse settings from TOML text.
    pub fn from_toml(settings_str: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(settings_str)
            .map_err(|err| Error::BadParam(format!("could not parse settings: {err}")))?;

        // sanity check the values before handing them out
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize settings as TOML text.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|err| Error::BadParam(err.to_string()))
    }
}

impl SettingsValidate for Settings {
    fn validate(&self) -> Result<()> {
        self.der.validate()?;
        self.certificate.validate()
    }
}
