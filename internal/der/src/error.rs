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

use thiserror::Error;

use crate::Tag;

/// Describes why a byte buffer could not be decoded as DER.
///
/// Every variant is fatal to the decode in progress. A malformed element
/// invalidates the decode of whatever structure contains it.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum DerError {
    /// The identifier octets are missing, unterminated, overflow a `u32`,
    /// or (in strict mode) use a non-minimal high tag number form.
    #[error("malformed tag")]
    MalformedTag,

    /// The buffer ends before the length octets or the declared content.
    #[error("element is truncated")]
    Truncated,

    /// The long form length uses more than eight octets or does not fit
    /// into a `usize`.
    #[error("invalid content length")]
    InvalidLength,

    /// The length could have been encoded in fewer octets.
    #[error("length is not minimally encoded")]
    NonMinimalLength,

    /// Indefinite length (BER only) was found.
    #[error("indefinite length encoding is not supported")]
    UnsupportedEncoding,

    /// A child element declares more bytes than remain in its parent.
    #[error("child element extends past the end of its parent")]
    TruncatedSequence,

    /// A BIT STRING declares unused bits in its last octet.
    #[error("bit strings with {0} unused bits are not supported")]
    UnsupportedBitString(u8),

    /// Nesting went deeper than [`DerSettings::max_depth`] allows.
    ///
    /// [`DerSettings::max_depth`]: crate::DerSettings::max_depth
    #[error("nesting exceeds the maximum depth of {0}")]
    DepthExceeded(usize),

    /// An OBJECT IDENTIFIER has empty, unterminated, or overflowing content.
    #[error("malformed object identifier")]
    MalformedOid,

    /// The element does not have the expected tag.
    #[error("expected {expected}, found {found}")]
    UnexpectedTag {
        /// Tag that the caller asked for.
        expected: Tag,

        /// Tag that was actually encoded.
        found: Tag,
    },

    /// Bytes remain after an element that was required to fill its buffer.
    #[error("{0} bytes of trailing data after element")]
    TrailingData(usize),
}
