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

use std::fmt;

/// The class of an ASN.1 tag, taken from the top two bits of the identifier
/// octet.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TagClass {
    /// Types defined by X.680 itself.
    Universal,

    /// Application-wide types.
    Application,

    /// Tags whose meaning depends on the enclosing structure (`[n]`).
    ContextSpecific,

    /// Private-use types.
    Private,
}

impl TagClass {
    pub(crate) fn from_identifier(octet: u8) -> Self {
        match octet >> 6 {
            0 => Self::Universal,
            1 => Self::Application,
            2 => Self::ContextSpecific,
            _ => Self::Private,
        }
    }
}

impl fmt::Display for TagClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Universal => "UNIVERSAL",
            Self::Application => "APPLICATION",
            Self::ContextSpecific => "CONTEXT",
            Self::Private => "PRIVATE",
        })
    }
}

/// A decoded ASN.1 tag.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Tag {
    /// Tag class.
    pub class: TagClass,

    /// `true` if the content is itself a series of encoded elements.
    pub constructed: bool,

    /// Tag number within the class.
    pub number: u32,
}

impl Tag {
    /// `BOOLEAN`
    pub const BOOLEAN: Tag = Tag::universal(1, false);

    /// `INTEGER`
    pub const INTEGER: Tag = Tag::universal(2, false);

    /// `BIT STRING`
    pub const BIT_STRING: Tag = Tag::universal(3, false);

    /// `OCTET STRING`
    pub const OCTET_STRING: Tag = Tag::universal(4, false);

    /// `NULL`
    pub const NULL: Tag = Tag::universal(5, false);

    /// `OBJECT IDENTIFIER`
    pub const OBJECT_IDENTIFIER: Tag = Tag::universal(6, false);

    /// `SEQUENCE` / `SEQUENCE OF`
    pub const SEQUENCE: Tag = Tag::universal(16, true);

    /// `SET` / `SET OF`
    pub const SET: Tag = Tag::universal(17, true);

    /// Build a universal tag.
    pub const fn universal(number: u32, constructed: bool) -> Self {
        Self {
            class: TagClass::Universal,
            constructed,
            number,
        }
    }

    /// Build a context-specific tag (`[number]`).
    pub const fn context_specific(number: u32, constructed: bool) -> Self {
        Self {
            class: TagClass::ContextSpecific,
            constructed,
            number,
        }
    }

    fn universal_name(&self) -> Option<&'static str> {
        if self.class != TagClass::Universal {
            return None;
        }

        Some(match self.number {
            1 => "BOOLEAN",
            2 => "INTEGER",
            3 => "BIT STRING",
            4 => "OCTET STRING",
            5 => "NULL",
            6 => "OBJECT IDENTIFIER",
            10 => "ENUMERATED",
            12 => "UTF8String",
            16 => "SEQUENCE",
            17 => "SET",
            19 => "PrintableString",
            20 => "TeletexString",
            22 => "IA5String",
            23 => "UTCTime",
            24 => "GeneralizedTime",
            30 => "BMPString",
            _ => return None,
        })
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.universal_name(), self.class) {
            (Some(name), _) => f.write_str(name),
            (None, TagClass::ContextSpecific) => write!(f, "[{}]", self.number),
            (None, class) => write!(f, "[{class} {}]", self.number),
        }
    }
}
