//! Fixed-width decimal field codec.
//!
//! Every serialized form in this crate (fragments, legacy records,
//! attribute hashes) is a run of zero-padded ASCII decimal fields with
//! no separators. Field width carries all the structure, so encoding
//! and decoding are exact-width operations: `"05"` is a valid 2-digit
//! field, `"5"` and `"005"` are not.
//!
//! # Examples
//!
//! ```ignore
//! assert_eq!(encode2(7)?, "07");
//! assert_eq!(decode3("042")?, 42);
//! ```

use thiserror::Error;

/// Decode/encode failures for fixed-width fields.
///
/// `offset` values are byte positions into the input the caller handed
/// in, so messages stay actionable for concatenated streams.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    /// A field slot contains something other than the expected digits.
    #[error("malformed field at offset {offset}: expected {width} decimal digit(s), found `{found}`")]
    MalformedField {
        offset: usize,
        width: usize,
        found: String,
    },

    /// The input ends before a complete field could be read.
    #[error("input truncated at offset {offset}: {needed} more character(s) needed")]
    TruncatedInput { offset: usize, needed: usize },

    /// A value has more digits than its field can hold.
    #[error("value {value} does not fit in a {width}-digit field")]
    FieldOverflow { value: u16, width: usize },
}

/// Encode a value as a zero-padded 2-digit field (`0..=99`).
#[inline]
pub fn encode2(value: u16) -> Result<String, CodecError> {
    if value > 99 {
        return Err(CodecError::FieldOverflow { value, width: 2 });
    }
    Ok(format!("{value:02}"))
}

/// Encode a value as a zero-padded 3-digit field (`0..=999`).
#[inline]
pub fn encode3(value: u16) -> Result<String, CodecError> {
    if value > 999 {
        return Err(CodecError::FieldOverflow { value, width: 3 });
    }
    Ok(format!("{value:03}"))
}

/// Decode an exactly-2-digit field.
#[inline]
pub fn decode2(s: &str) -> Result<u8, CodecError> {
    Ok(decode_digits(s.as_bytes(), 2, 0)? as u8)
}

/// Decode an exactly-3-digit field.
#[inline]
pub fn decode3(s: &str) -> Result<u16, CodecError> {
    decode_digits(s.as_bytes(), 3, 0)
}

/// Decode the 2-digit field starting at `offset` within `stream`.
///
/// Unlike [`decode2`] this reports truncation (stream too short for the
/// field) separately from malformed content, and error offsets point
/// into `stream` rather than the field slice.
#[inline]
pub fn decode2_at(stream: &str, offset: usize) -> Result<u8, CodecError> {
    let bytes = stream.as_bytes();
    let end = offset + 2;
    if bytes.len() < end {
        return Err(CodecError::TruncatedInput {
            offset: bytes.len(),
            needed: end - bytes.len(),
        });
    }
    Ok(decode_digits(&bytes[offset..end], 2, offset)? as u8)
}

/// 3-digit sibling of [`decode2_at`].
#[inline]
pub fn decode3_at(stream: &str, offset: usize) -> Result<u16, CodecError> {
    let bytes = stream.as_bytes();
    let end = offset + 3;
    if bytes.len() < end {
        return Err(CodecError::TruncatedInput {
            offset: bytes.len(),
            needed: end - bytes.len(),
        });
    }
    decode_digits(&bytes[offset..end], 3, offset)
}

/// Reject non-ASCII input up front.
///
/// Every format in this crate counts fields in bytes; multi-byte chars
/// would silently shift every later offset, so they fail here with the
/// position of the first offender.
pub fn ensure_ascii(s: &str) -> Result<(), CodecError> {
    match s.find(|c: char| !c.is_ascii()) {
        Some(at) => Err(CodecError::MalformedField {
            offset: at,
            width: 1,
            found: s[at..].chars().take(1).collect(),
        }),
        None => Ok(()),
    }
}

/// Decode `width` ASCII digits from `bytes`, reporting errors at
/// `base_offset` (the slice's position in the original input).
fn decode_digits(bytes: &[u8], width: usize, base_offset: usize) -> Result<u16, CodecError> {
    if bytes.len() < width {
        return Err(CodecError::TruncatedInput {
            offset: base_offset + bytes.len(),
            needed: width - bytes.len(),
        });
    }
    if bytes.len() > width {
        return Err(CodecError::MalformedField {
            offset: base_offset,
            width,
            found: String::from_utf8_lossy(bytes).into_owned(),
        });
    }

    let mut value = 0u16;
    for (i, &b) in bytes.iter().enumerate() {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return Err(CodecError::MalformedField {
                offset: base_offset + i,
                width,
                found: String::from_utf8_lossy(bytes).into_owned(),
            });
        }
        value = value * 10 + u16::from(d);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode2_pads_with_zeros() {
        assert_eq!(encode2(0).unwrap(), "00");
        assert_eq!(encode2(5).unwrap(), "05");
        assert_eq!(encode2(99).unwrap(), "99");
    }

    #[test]
    fn test_encode3_pads_with_zeros() {
        assert_eq!(encode3(0).unwrap(), "000");
        assert_eq!(encode3(42).unwrap(), "042");
        assert_eq!(encode3(999).unwrap(), "999");
    }

    #[test]
    fn test_encode_rejects_overflow() {
        assert_eq!(
            encode2(100),
            Err(CodecError::FieldOverflow {
                value: 100,
                width: 2
            })
        );
        assert_eq!(
            encode3(1000),
            Err(CodecError::FieldOverflow {
                value: 1000,
                width: 3
            })
        );
    }

    #[test]
    fn test_decode_round_trips_every_value() {
        for v in 0..=99u16 {
            assert_eq!(decode2(&encode2(v).unwrap()).unwrap(), v as u8);
        }
        for v in 0..=999u16 {
            assert_eq!(decode3(&encode3(v).unwrap()).unwrap(), v);
        }
    }

    #[test]
    fn test_decode_requires_exact_width() {
        assert!(matches!(
            decode2("5"),
            Err(CodecError::TruncatedInput { offset: 1, needed: 1 })
        ));
        assert!(matches!(
            decode2("123"),
            Err(CodecError::MalformedField { .. })
        ));
        assert!(matches!(
            decode3("42"),
            Err(CodecError::TruncatedInput { offset: 2, needed: 1 })
        ));
    }

    #[test]
    fn test_decode_rejects_non_digits() {
        assert_eq!(
            decode2("4x"),
            Err(CodecError::MalformedField {
                offset: 1,
                width: 2,
                found: "4x".to_string()
            })
        );
        assert!(matches!(
            decode3("-12"),
            Err(CodecError::MalformedField { .. })
        ));
        assert!(matches!(
            decode2("  "),
            Err(CodecError::MalformedField { .. })
        ));
    }

    #[test]
    fn test_decode2_at_reads_inside_stream() {
        assert_eq!(decode2_at("xx42yy", 2).unwrap(), 42);
        assert_eq!(decode2_at("07", 0).unwrap(), 7);
    }

    #[test]
    fn test_decode2_at_reports_truncation() {
        assert_eq!(
            decode2_at("123", 2),
            Err(CodecError::TruncatedInput {
                offset: 3,
                needed: 1
            })
        );
        assert_eq!(
            decode2_at("", 0),
            Err(CodecError::TruncatedInput {
                offset: 0,
                needed: 2
            })
        );
    }

    #[test]
    fn test_decode2_at_offsets_are_absolute() {
        assert_eq!(
            decode2_at("00a1", 2),
            Err(CodecError::MalformedField {
                offset: 2,
                width: 2,
                found: "a1".to_string()
            })
        );
    }

    #[test]
    fn test_decode3_at_reads_inside_stream() {
        assert_eq!(decode3_at("1042000", 4).unwrap(), 0);
        assert_eq!(decode3_at("999", 0).unwrap(), 999);
        assert_eq!(
            decode3_at("10", 1),
            Err(CodecError::TruncatedInput {
                offset: 2,
                needed: 2
            })
        );
    }

    #[test]
    fn test_ensure_ascii() {
        assert_eq!(ensure_ascii("r00051005p12"), Ok(()));
        assert_eq!(ensure_ascii(""), Ok(()));
        assert_eq!(
            ensure_ascii("00é1"),
            Err(CodecError::MalformedField {
                offset: 2,
                width: 1,
                found: "é".to_string()
            })
        );
    }
}
