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

use std::{fmt, str::FromStr};

use crate::DerError;

/// An ASN.1 object identifier, held as its list of arcs.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Oid {
    arcs: Vec<u64>,
}

impl Oid {
    /// Create an OID from its arcs.
    pub fn new(arcs: &[u64]) -> Self {
        Self {
            arcs: arcs.to_vec(),
        }
    }

    /// The arcs, first to last.
    pub fn arcs(&self) -> &[u64] {
        &self.arcs
    }

    /// Decode the content octets of an OBJECT IDENTIFIER.
    ///
    /// Each subidentifier is base-128 with the high bit marking
    /// continuation. The first subidentifier packs the first two arcs as
    /// `40 * first + second`.
    pub fn from_der_value(content: &[u8]) -> Result<Self, DerError> {
        if content.is_empty() {
            return Err(DerError::MalformedOid);
        }

        let mut arcs = Vec::new();
        let mut value: u64 = 0;
        let mut at_start = true;

        for &octet in content {
            // X.690 8.19.2: no leading 0x80 padding in a subidentifier.
            if at_start && octet == 0x80 {
                return Err(DerError::MalformedOid);
            }
            if value > u64::MAX >> 7 {
                return Err(DerError::MalformedOid);
            }

            value = (value << 7) | u64::from(octet & 0x7F);
            at_start = octet & 0x80 == 0;

            if at_start {
                if arcs.is_empty() {
                    let (first, second) = match value {
                        0..=39 => (0, value),
                        40..=79 => (1, value - 40),
                        _ => (2, value - 80),
                    };
                    arcs.push(first);
                    arcs.push(second);
                } else {
                    arcs.push(value);
                }
                value = 0;
            }
        }

        if !at_start {
            return Err(DerError::MalformedOid);
        }

        Ok(Self { arcs })
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut arcs = self.arcs.iter();
        if let Some(first) = arcs.next() {
            write!(f, "{first}")?;
        }
        for arc in arcs {
            write!(f, ".{arc}")?;
        }
        Ok(())
    }
}

impl FromStr for Oid {
    type Err = DerError;

    /// Parse the dotted form, e.g. `"2.16.840.1.101.3.4.2.1"`.
    fn from_str(dotted: &str) -> Result<Self, Self::Err> {
        let arcs = dotted
            .split('.')
            .map(|arc| arc.parse::<u64>().map_err(|_| DerError::MalformedOid))
            .collect::<Result<Vec<_>, _>>()?;

        match arcs.as_slice() {
            [0..=1, 0..=39, ..] | [2, _, ..] => Ok(Self { arcs }),
            _ => Err(DerError::MalformedOid),
        }
    }
}
