//! Reflow of an interpreted stream into current-format fragments.
//!
//! After marker expansion every record is an 11-character window:
//!
//! ```text
//! offset  0         8   9
//! field   x y w h   p   style      (geometry 4x2 digits, prefix, 2 digits)
//! ```
//!
//! Reflow renames the style prefix (`p` -> `w`), then reorders each
//! window into the 10-character style-first fragment consumed by the
//! renderer. The prefix char at offset 8 only ever marked where the
//! style field starts; the fragment layout makes it redundant, so it
//! is dropped.

use crate::rect::FRAGMENT_LEN;

/// Style prefix emitted by legacy producers.
const LEGACY_STYLE_PREFIX: &str = "p";
/// Style prefix the current palette classes use.
const CURRENT_STYLE_PREFIX: &str = "w";

/// Interpreted record width: 8 geometry digits + prefix + style field.
pub const WINDOW_LEN: usize = 11;
/// Window offset of the 2-digit style field.
const STYLE_AT: usize = 9;
/// Geometry digits at the head of a window.
const GEOMETRY_LEN: usize = 8;

/// Rename legacy style prefixes. Purely textual: every `p` in a
/// well-formed stream is a prefix, digits cannot collide with it.
pub fn substitute_style_prefix(stream: &str) -> String {
    stream.replace(LEGACY_STYLE_PREFIX, CURRENT_STYLE_PREFIX)
}

/// Reorder 11-char windows into 10-char style-first fragments.
///
/// Trailing characters short of a full window are dropped; the caller
/// decides whether that deserves a diagnostic. Expects ASCII (the
/// tokenizer guarantees it).
pub fn rechunk(stream: &str) -> String {
    let windows = stream.len() / WINDOW_LEN;
    let mut out = String::with_capacity(windows * FRAGMENT_LEN);

    for i in 0..windows {
        let window = &stream[i * WINDOW_LEN..(i + 1) * WINDOW_LEN];
        out.push_str(&window[STYLE_AT..]);
        out.push_str(&window[..GEOMETRY_LEN]);
    }
    out
}
