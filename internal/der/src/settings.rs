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

use serde::{Deserialize, Serialize};

/// Limits applied while decoding.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DerSettings {
    /// Deepest nesting level a child element may sit at. The element a decode
    /// starts from is at depth 0.
    pub max_depth: usize,

    /// Reject lengths and high tag numbers that are not minimally encoded.
    pub strict_lengths: bool,
}

impl Default for DerSettings {
    fn default() -> Self {
        Self {
            max_depth: 64,
            strict_lengths: true,
        }
    }
}
