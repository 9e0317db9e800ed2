//! Legacy stream migration.
//!
//! Old avatar data interleaves compact marker tokens with normalized
//! records in one character stream. Migration rewrites a whole stream
//! into the current fragment encoding in three passes over immutable
//! data:
//!
//! 1. tokenize + interpret: expand `i`/`r` markers into normalized
//!    `x y width height` geometry ([`token`], [`interpret`])
//! 2. substitute the legacy `p` style prefix with `w`
//! 3. re-chunk 11-char windows into 10-char style-first fragments
//!
//! The legacy tool did pass 1 by splicing the string under its own
//! scan cursor and rewinding. For well-formed input the pure fold
//! below emits byte-identical output; for malformed input it returns
//! an error where the splice loop would have cascaded garbage.

mod reflow;
mod token;


pub use token::{Token, tokenize};

use crate::codec::{self, CodecError};
use crate::debug;

/// Geometry spliced in for a pixel marker: width=1, height=1.
const UNIT_EXTENT: &str = "0101";

/// Migrate one legacy stream to the current fragment encoding.
pub fn migrate(input: &str) -> Result<String, CodecError> {
    let normalized = interpret(&tokenize(input)?)?;

    let dropped = normalized.len() % reflow::WINDOW_LEN;
    if dropped != 0 {
        debug!(
            "migrate";
            "stream is not a whole number of records, dropping {dropped} trailing character(s)"
        );
    }

    Ok(reflow::rechunk(&reflow::substitute_style_prefix(
        &normalized,
    )))
}

/// Fold tokens into the normalized geometry stream.
///
/// Literals are copied through; a pixel becomes `x y 01 01`; corners
/// become `min-x min-y width height` where width/height span the
/// corners inclusively. Corner order does not matter.
pub fn interpret(tokens: &[Token]) -> Result<String, CodecError> {
    let mut out = String::new();

    for token in tokens {
        match *token {
            Token::Literal(run) => out.push_str(run),
            Token::Pixel { x, y } => {
                out.push_str(&codec::encode2(u16::from(x))?);
                out.push_str(&codec::encode2(u16::from(y))?);
                out.push_str(UNIT_EXTENT);
            }
            Token::Corners { x1, y1, x2, y2 } => {
                // Inclusive span: corners (3,_) and (5,_) are 3 cells wide.
                let width = u16::from(x1.abs_diff(x2)) + 1;
                let height = u16::from(y1.abs_diff(y2)) + 1;
                out.push_str(&codec::encode2(u16::from(x1.min(x2)))?);
                out.push_str(&codec::encode2(u16::from(y1.min(y2)))?);
                out.push_str(&codec::encode2(width)?);
                out.push_str(&codec::encode2(height)?);
            }
        }
    }

    Ok(out)
}
