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

use std::{
    fmt,
    ops::{Deref, Range},
};

use crate::{DerError, DerSettings, Oid, Tag, TagClass};

/// A borrowed view over exactly one DER tag-length-value item.
///
/// The header is decoded when the element is created, so every accessor is
/// infallible and the element never changes afterwards. The view is clipped
/// to the element's declared total length: nothing reachable from it (its
/// content, its children, their children) can read past that boundary, even
/// when the buffer it was cut from continues with sibling elements.
///
/// Two elements over identical bytes compare equal, regardless of where they
/// were found.
#[derive(Clone, Copy)]
pub struct DerElement<'a> {
    bytes: &'a [u8],
    tag: Tag,
    header_len: usize,
    offset: usize,
    depth: usize,
    settings: DerSettings,
}

/// Decoded content of a [`DerElement`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Content<'a> {
    /// The declared content length is zero.
    Empty,

    /// Child elements of a constructed element, in encoded order.
    Constructed(Sequence<'a>),

    /// Content octets of a primitive element. For a BIT STRING the leading
    /// unused-bits octet has already been removed.
    Primitive(&'a [u8]),
}

impl<'a> Content<'a> {
    /// Returns the child elements, if this is constructed content.
    pub fn as_sequence(&self) -> Option<&Sequence<'a>> {
        match self {
            Self::Constructed(sequence) => Some(sequence),
            _ => None,
        }
    }

    /// Returns the content octets, if this is primitive content.
    pub fn as_bytes(&self) -> Option<&'a [u8]> {
        match self {
            Self::Primitive(bytes) => Some(bytes),
            _ => None,
        }
    }
}

/// The ordered children of a constructed element.
///
/// X.509 fields are positional, so order is preserved exactly as encoded.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Sequence<'a>(Vec<DerElement<'a>>);

impl<'a> Sequence<'a> {
    /// Consume the sequence and return its elements.
    pub fn into_vec(self) -> Vec<DerElement<'a>> {
        self.0
    }
}

impl<'a> Deref for Sequence<'a> {
    type Target = [DerElement<'a>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for Sequence<'a> {
    type Item = DerElement<'a>;
    type IntoIter = std::vec::IntoIter<DerElement<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, 's> IntoIterator for &'s Sequence<'a> {
    type Item = &'s DerElement<'a>;
    type IntoIter = std::slice::Iter<'s, DerElement<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a> DerElement<'a> {
    /// Decode the element that starts at the beginning of `bytes` using the
    /// default (strict) settings.
    ///
    /// Bytes after the end of the element are ignored.
    pub fn parse(bytes: &'a [u8]) -> Result<Self, DerError> {
        Self::parse_with(bytes, &DerSettings::default())
    }

    /// Decode the element that starts at the beginning of `bytes`.
    ///
    /// Bytes after the end of the element are ignored.
    pub fn parse_with(bytes: &'a [u8], settings: &DerSettings) -> Result<Self, DerError> {
        Self::decode(bytes, 0, 0, settings)
    }

    /// Decode an element that must occupy all of `bytes`.
    pub fn parse_exact(bytes: &'a [u8]) -> Result<Self, DerError> {
        Self::parse_exact_with(bytes, &DerSettings::default())
    }

    /// Decode an element that must occupy all of `bytes`.
    pub fn parse_exact_with(bytes: &'a [u8], settings: &DerSettings) -> Result<Self, DerError> {
        let element = Self::parse_with(bytes, settings)?;
        match bytes.len() - element.total_len() {
            0 => Ok(element),
            trailing => Err(DerError::TrailingData(trailing)),
        }
    }

    fn decode(
        bytes: &'a [u8],
        offset: usize,
        depth: usize,
        settings: &DerSettings,
    ) -> Result<Self, DerError> {
        if depth > settings.max_depth {
            return Err(DerError::DepthExceeded(settings.max_depth));
        }

        let (tag, tag_len) = decode_tag(bytes, settings.strict_lengths)?;
        let (content_len, length_len) =
            decode_length(&bytes[tag_len..], settings.strict_lengths)?;

        let header_len = tag_len + length_len;
        let total_len = header_len
            .checked_add(content_len)
            .ok_or(DerError::InvalidLength)?;

        let bytes = bytes.get(..total_len).ok_or(DerError::Truncated)?;

        Ok(Self {
            bytes,
            tag,
            header_len,
            offset,
            depth,
            settings: *settings,
        })
    }

    /// The element's tag.
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Tag class (top two bits of the identifier octet).
    pub fn tag_class(&self) -> TagClass {
        self.tag.class
    }

    /// `true` for constructed elements (bit 6 of the identifier octet).
    pub fn is_constructed(&self) -> bool {
        self.tag.constructed
    }

    /// Tag number, including multi-octet high tag numbers.
    pub fn tag_number(&self) -> u32 {
        self.tag.number
    }

    /// Number of identifier and length octets.
    pub fn header_len(&self) -> usize {
        self.header_len
    }

    /// Declared content length.
    pub fn content_len(&self) -> usize {
        self.bytes.len() - self.header_len
    }

    /// Header plus content length.
    pub fn total_len(&self) -> usize {
        self.bytes.len()
    }

    /// Position of the content octets within [`as_bytes`](Self::as_bytes).
    pub fn content_range(&self) -> Range<usize> {
        self.header_len..self.bytes.len()
    }

    /// Position of this element within the buffer the outermost element was
    /// parsed from.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Byte range of the whole element within the outermost buffer.
    pub fn span(&self) -> Range<usize> {
        self.offset..self.offset + self.bytes.len()
    }

    /// Byte range of the content octets within the outermost buffer.
    pub fn content_span(&self) -> Range<usize> {
        self.offset + self.header_len..self.offset + self.bytes.len()
    }

    /// Nesting level; the element a decode starts from is at depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The complete encoding: identifier, length, and content octets.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// The content octets exactly as encoded, without BIT STRING handling.
    pub fn raw_content(&self) -> &'a [u8] {
        &self.bytes[self.header_len..]
    }

    /// Decode the element's content.
    ///
    /// * A zero content length yields [`Content::Empty`].
    /// * A constructed element yields its children.
    /// * A universal BIT STRING yields the octets after the unused-bits
    ///   octet, which must be zero.
    /// * Tag number 3 in any other class, such as context-specific `[3]`,
    ///   is not a BIT STRING and is returned unchanged.
    /// * Any other primitive element yields its raw content.
    pub fn content(&self) -> Result<Content<'a>, DerError> {
        if self.content_len() == 0 {
            return Ok(Content::Empty);
        }

        if self.tag.constructed {
            return self.children().map(Content::Constructed);
        }

        if self.tag == Tag::BIT_STRING {
            return match self.raw_content() {
                [0, bits @ ..] => Ok(Content::Primitive(bits)),
                [unused, ..] => Err(DerError::UnsupportedBitString(*unused)),
                [] => Ok(Content::Empty),
            };
        }

        Ok(Content::Primitive(self.raw_content()))
    }

    /// Decode the children of a constructed element.
    ///
    /// Fails with [`DerError::UnexpectedTag`] for a primitive element.
    pub fn children(&self) -> Result<Sequence<'a>, DerError> {
        if !self.tag.constructed {
            return Err(DerError::UnexpectedTag {
                expected: Tag {
                    constructed: true,
                    ..self.tag
                },
                found: self.tag,
            });
        }

        let content = self.raw_content();
        let base = self.offset + self.header_len;

        let mut children = Vec::new();
        let mut pos = 0;

        while pos < content.len() {
            let child = Self::decode(&content[pos..], base + pos, self.depth + 1, &self.settings);
            let child = match child {
                Err(DerError::Truncated) => return Err(DerError::TruncatedSequence),
                result => result?,
            };

            pos += child.total_len();
            children.push(child);
        }

        Ok(Sequence(children))
    }

    /// Returns `self` if the element has exactly the tag `expected`.
    pub fn expect(&self, expected: Tag) -> Result<&Self, DerError> {
        if self.tag == expected {
            Ok(self)
        } else {
            Err(DerError::UnexpectedTag {
                expected,
                found: self.tag,
            })
        }
    }

    /// Decode an OBJECT IDENTIFIER element.
    pub fn as_oid(&self) -> Result<Oid, DerError> {
        self.expect(Tag::OBJECT_IDENTIFIER)?;
        Oid::from_der_value(self.raw_content())
    }
}

impl PartialEq for DerElement<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for DerElement<'_> {}

impl fmt::Debug for DerElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerElement")
            .field("tag", &self.tag)
            .field("offset", &self.offset)
            .field("header_len", &self.header_len)
            .field("content_len", &self.content_len())
            .finish()
    }
}

// Returns the tag and the number of identifier octets.
fn decode_tag(bytes: &[u8], strict: bool) -> Result<(Tag, usize), DerError> {
    let first = *bytes.first().ok_or(DerError::MalformedTag)?;

    let class = TagClass::from_identifier(first);
    let constructed = first & 0x20 != 0;

    if first & 0x1F != 0x1F {
        let tag = Tag {
            class,
            constructed,
            number: u32::from(first & 0x1F),
        };
        return Ok((tag, 1));
    }

    let mut number: u32 = 0;
    for (i, &octet) in bytes.iter().enumerate().skip(1) {
        if strict && i == 1 && octet == 0x80 {
            return Err(DerError::MalformedTag);
        }
        if number > u32::MAX >> 7 {
            return Err(DerError::MalformedTag);
        }

        number = (number << 7) | u32::from(octet & 0x7F);

        if octet & 0x80 == 0 {
            if strict && number < 0x1F {
                return Err(DerError::MalformedTag);
            }

            let tag = Tag {
                class,
                constructed,
                number,
            };
            return Ok((tag, i + 1));
        }
    }

    Err(DerError::MalformedTag)
}

// Returns the content length and the number of length octets.
fn decode_length(bytes: &[u8], strict: bool) -> Result<(usize, usize), DerError> {
    let first = *bytes.first().ok_or(DerError::Truncated)?;

    if first & 0x80 == 0 {
        return Ok((usize::from(first), 1));
    }

    let count = usize::from(first & 0x7F);
    if count == 0 {
        return Err(DerError::UnsupportedEncoding);
    }
    if count > 8 {
        return Err(DerError::InvalidLength);
    }

    let octets = bytes.get(1..=count).ok_or(DerError::Truncated)?;
    if strict && octets[0] == 0 {
        return Err(DerError::NonMinimalLength);
    }

    let length = octets
        .iter()
        .fold(0u64, |acc, &octet| (acc << 8) | u64::from(octet));

    if strict && length < 0x80 {
        return Err(DerError::NonMinimalLength);
    }

    let length = usize::try_from(length).map_err(|_| DerError::InvalidLength)?;
    Ok((length, 1 + count))
}
