//! Fixed style palette.
//!
//! The avatar set ships with one palette: style codes 10..=38 mapped
//! to fill colors, referenced from markup as classes `w10`..`w38`.
//! Codes are part of the serialized format, so the table is append-only
//! and the colors are kept byte-for-byte as published (including the
//! mixed hex casing).

use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// Style code -> fill color, in stylesheet order.
pub const PALETTE: [(u8, &str); 29] = [
    (10, "#000000"),
    (11, "#ffffff"),
    (12, "#00aaff"),
    (13, "#ff0000"),
    (14, "#ff7777"),
    (15, "#ff89b9"),
    (16, "#fff9e5"),
    (17, "#fff9d5"),
    (18, "#93c63b"),
    (19, "#ff6a00"),
    (20, "#808080"),
    (21, "#a94d00"),
    (22, "#00ffff"),
    (23, "#00ff00"),
    (24, "#B2B2B2"),
    (25, "#267F00"),
    (26, "#5B7F00"),
    (27, "#7F3300"),
    (28, "#A3A3A3"),
    (29, "#B78049"),
    (30, "#B5872B"),
    (31, "#565756"),
    (32, "#282828"),
    (33, "#8F7941"),
    (34, "#E3E5E4"),
    (35, "#6BBDD3"),
    (36, "#FFFF00"),
    (37, "#aaf2d1"),
    (38, "#6A6257"),
];

static COLOR_BY_CODE: LazyLock<FxHashMap<u8, &'static str>> =
    LazyLock::new(|| PALETTE.iter().copied().collect());

/// Fill color for a style code, if the palette defines it.
pub fn color_for(code: u8) -> Option<&'static str> {
    COLOR_BY_CODE.get(&code).copied()
}

/// Build the document stylesheet: one scope rule pinning the root to
/// crisp pixel edges, then one class per palette entry.
pub fn stylesheet(svg_id: &str) -> String {
    let mut out = String::with_capacity(64 + PALETTE.len() * 20);
    out.push_str("<style>#");
    out.push_str(svg_id);
    out.push_str("{shape-rendering: crispedges;}");
    for (code, color) in PALETTE {
        out.push_str(&format!(".w{code}{{fill:{color}}}"));
    }
    out.push_str("</style>");
    out
}
