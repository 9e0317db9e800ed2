//! Rect descriptor model.
//!
//! A rendered avatar is a flat list of axis-aligned rectangles on a
//! 50x50 grid. Each rect serializes to a 10-character *fragment*:
//!
//! ```text
//! offset  0    2    4    6      8
//! field   style x    y    width  height     (2 digits each)
//! ```
//!
//! Fragments carry no separators; streams are either concatenated or
//! comma-joined (see [`crate::svg`]).

use crate::codec::{self, CodecError};

/// Serialized fragment length in bytes.
pub const FRAGMENT_LEN: usize = 10;

/// One solid-color rectangle of an avatar.
///
/// `style_id` selects a palette class (`w10`..`w38` in the shipped
/// palette); geometry is in grid cells. All fields are limited to two
/// decimal digits by the fragment encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectDescriptor {
    pub style_id: u8,
    pub x: u8,
    pub y: u8,
    pub width: u8,
    pub height: u8,
}

impl RectDescriptor {
    pub const fn new(style_id: u8, x: u8, y: u8, width: u8, height: u8) -> Self {
        Self {
            style_id,
            x,
            y,
            width,
            height,
        }
    }

    /// Parse the fragment starting at `offset` within `stream`.
    ///
    /// Error offsets are absolute positions in `stream`, not in the
    /// fragment, so callers iterating a concatenated stream get usable
    /// positions for free.
    pub fn from_fragment(stream: &str, offset: usize) -> Result<Self, CodecError> {
        Ok(Self {
            style_id: codec::decode2_at(stream, offset)?,
            x: codec::decode2_at(stream, offset + 2)?,
            y: codec::decode2_at(stream, offset + 4)?,
            width: codec::decode2_at(stream, offset + 6)?,
            height: codec::decode2_at(stream, offset + 8)?,
        })
    }

    /// Serialize to the 10-character fragment form.
    ///
    /// Fails with [`CodecError::FieldOverflow`] if any field exceeds
    /// two digits; the encoding has no escape hatch for wider values.
    pub fn to_fragment(&self) -> Result<String, CodecError> {
        let mut out = String::with_capacity(FRAGMENT_LEN);
        for value in [self.style_id, self.x, self.y, self.width, self.height] {
            out.push_str(&codec::encode2(u16::from(value))?);
        }
        Ok(out)
    }

    /// Render as an SVG `<rect/>` element.
    ///
    /// Attribute text matches the fragment fields byte for byte
    /// (zero-padded two digits), so markup produced from a parsed
    /// fragment quotes the fragment verbatim.
    pub fn to_markup(&self) -> String {
        format!(
            "<rect class='w{:02}' x='{:02}' y='{:02}' width='{:02}' height='{:02}'/>",
            self.style_id, self.x, self.y, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_layout_is_style_first() {
        let rect = RectDescriptor::new(12, 0, 5, 11, 1);
        assert_eq!(rect.to_fragment().unwrap(), "1200051101");
    }

    #[test]
    fn test_from_fragment_inverts_to_fragment() {
        let rect = RectDescriptor::new(38, 49, 0, 1, 23);
        let fragment = rect.to_fragment().unwrap();
        assert_eq!(RectDescriptor::from_fragment(&fragment, 0).unwrap(), rect);
    }

    #[test]
    fn test_from_fragment_at_offset() {
        let stream = "10000050501200051101";
        let second = RectDescriptor::from_fragment(stream, 10).unwrap();
        assert_eq!(second, RectDescriptor::new(12, 0, 5, 11, 1));
    }

    #[test]
    fn test_from_fragment_truncated() {
        assert_eq!(
            RectDescriptor::from_fragment("120005", 0),
            Err(CodecError::TruncatedInput {
                offset: 6,
                needed: 2
            })
        );
    }

    #[test]
    fn test_from_fragment_rejects_non_digits() {
        let err = RectDescriptor::from_fragment("12x0051101", 0).unwrap_err();
        assert!(matches!(err, CodecError::MalformedField { offset: 2, .. }));
    }

    #[test]
    fn test_to_fragment_rejects_wide_fields() {
        let rect = RectDescriptor::new(100, 0, 0, 1, 1);
        assert_eq!(
            rect.to_fragment(),
            Err(CodecError::FieldOverflow {
                value: 100,
                width: 2
            })
        );
    }

    #[test]
    fn test_markup_quotes_fields_verbatim() {
        let rect = RectDescriptor::from_fragment("1200051101", 0).unwrap();
        assert_eq!(
            rect.to_markup(),
            "<rect class='w12' x='00' y='05' width='11' height='01'/>"
        );
    }
}
