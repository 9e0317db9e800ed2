//! Legacy stream tokenizer.
//!
//! Legacy avatar streams mix already-normalized characters with two
//! marker shapes:
//!
//! ```text
//! i XX YY          pixel: 1x1 cell at (x, y)
//! r XX YY XX YY    corners: rect spanning (x1, y1)..(x2, y2)
//! ```
//!
//! Tokenizing never mutates the input. Marker fields are decoded
//! eagerly, so a malformed or truncated marker fails here with a
//! real offset instead of surviving into the rewrite stages.

use crate::codec::{self, CodecError};

/// Bytes consumed by a pixel marker (`i` + two 2-digit fields).
const PIXEL_SPAN: usize = 5;
/// Bytes consumed by a corners marker (`r` + four 2-digit fields).
const CORNERS_SPAN: usize = 9;

/// One lexical unit of a legacy stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Characters that need no rewriting (normalized geometry digits
    /// and style-class fields). Passed through verbatim.
    Literal(&'a str),
    /// `i` marker: a single grid cell.
    Pixel { x: u8, y: u8 },
    /// `r` marker: a rect described by two opposite corners, in
    /// stream order (x1, y1, x2, y2). The corners carry no ordering
    /// guarantee; normalization happens in the interpreter.
    Corners { x1: u8, y1: u8, x2: u8, y2: u8 },
}

/// Split a legacy stream into tokens.
///
/// The stream must be ASCII: every later stage (field offsets, window
/// re-chunking) counts bytes, and legacy producers only ever emitted
/// digits, markers and the `p` style prefix. Anything else is corrupt
/// input and is rejected up front.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, CodecError> {
    codec::ensure_ascii(input)?;

    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut run_start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        let (token, span) = match bytes[pos] {
            b'i' => {
                let x = codec::decode2_at(input, pos + 1)?;
                let y = codec::decode2_at(input, pos + 3)?;
                (Token::Pixel { x, y }, PIXEL_SPAN)
            }
            b'r' => {
                let x1 = codec::decode2_at(input, pos + 1)?;
                let y1 = codec::decode2_at(input, pos + 3)?;
                let x2 = codec::decode2_at(input, pos + 5)?;
                let y2 = codec::decode2_at(input, pos + 7)?;
                (Token::Corners { x1, y1, x2, y2 }, CORNERS_SPAN)
            }
            _ => {
                pos += 1;
                continue;
            }
        };

        if run_start < pos {
            tokens.push(Token::Literal(&input[run_start..pos]));
        }
        tokens.push(token);
        pos += span;
        run_start = pos;
    }

    if run_start < bytes.len() {
        tokens.push(Token::Literal(&input[run_start..]));
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_literal_only() {
        let tokens = tokenize("00112233p10").unwrap();
        assert_eq!(tokens, vec![Token::Literal("00112233p10")]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert_eq!(tokenize("").unwrap(), vec![]);
    }

    #[test]
    fn test_tokenize_pixel_fields() {
        let tokens = tokenize("i4622").unwrap();
        assert_eq!(tokens, vec![Token::Pixel { x: 46, y: 22 }]);
    }

    #[test]
    fn test_tokenize_corners_fields_in_stream_order() {
        let tokens = tokenize("r00051005").unwrap();
        assert_eq!(
            tokens,
            vec![Token::Corners {
                x1: 0,
                y1: 5,
                x2: 10,
                y2: 5
            }]
        );
    }

    #[test]
    fn test_tokenize_mixed_stream() {
        let tokens = tokenize("i4622p10r00051005p12").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Pixel { x: 46, y: 22 },
                Token::Literal("p10"),
                Token::Corners {
                    x1: 0,
                    y1: 5,
                    x2: 10,
                    y2: 5
                },
                Token::Literal("p12"),
            ]
        );
    }

    #[test]
    fn test_tokenize_truncated_pixel() {
        assert_eq!(
            tokenize("00i46"),
            Err(CodecError::TruncatedInput {
                offset: 5,
                needed: 2
            })
        );
    }

    #[test]
    fn test_tokenize_truncated_corners() {
        assert_eq!(
            tokenize("r0005100"),
            Err(CodecError::TruncatedInput {
                offset: 8,
                needed: 1
            })
        );
    }

    #[test]
    fn test_tokenize_non_digit_marker_field() {
        let err = tokenize("ix122").unwrap_err();
        assert!(matches!(err, CodecError::MalformedField { offset: 1, .. }));
    }

    #[test]
    fn test_tokenize_marker_inside_field_is_malformed() {
        // A nested marker cannot be a field digit; the in-place legacy
        // rewriter would have spliced first and reinterpreted the mess.
        let err = tokenize("ri0051005").unwrap_err();
        assert!(matches!(err, CodecError::MalformedField { offset: 1, .. }));
    }

    #[test]
    fn test_tokenize_rejects_non_ascii() {
        let err = tokenize("00é12233").unwrap_err();
        assert!(matches!(err, CodecError::MalformedField { offset: 2, .. }));
    }
}
