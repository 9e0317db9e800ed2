//! SVG rendering of fragment streams.
//!
//! Input is a stream of 10-char fragments, either concatenated or
//! comma-joined (both shapes circulate in the wild). Output is markup
//! only: one `<rect/>` per fragment, optionally wrapped in the full
//! standalone document with the palette stylesheet.

pub mod palette;

use crate::codec::{self, CodecError};
use crate::config::SvgConfig;
use crate::debug;
use crate::rect::{FRAGMENT_LEN, RectDescriptor};

/// Parse a fragment stream into rect descriptors.
///
/// Each comma-separated piece is chunked into 10-char fragments;
/// trailing characters short of a full fragment are skipped. Fragment
/// content is validated, a single bad digit fails the whole stream.
pub fn parse_fragments(input: &str) -> Result<Vec<RectDescriptor>, CodecError> {
    codec::ensure_ascii(input)?;

    let mut rects = Vec::with_capacity(input.len() / FRAGMENT_LEN);
    let mut skipped = 0;

    for piece in input.split(',') {
        let count = piece.len() / FRAGMENT_LEN;
        for i in 0..count {
            let rect = RectDescriptor::from_fragment(piece, i * FRAGMENT_LEN)?;
            if palette::color_for(rect.style_id).is_none() {
                // Renders as an unstyled (invisible) rect.
                debug!("render"; "style code {:02} has no palette entry", rect.style_id);
            }
            rects.push(rect);
        }
        skipped += piece.len() % FRAGMENT_LEN;
    }

    if skipped != 0 {
        debug!("render"; "skipped {skipped} character(s) short of a full fragment");
    }
    Ok(rects)
}

/// Render bare `<rect/>` elements, nothing around them.
pub fn render_rects(rects: &[RectDescriptor]) -> String {
    let mut out = String::with_capacity(rects.len() * 56);
    for rect in rects {
        out.push_str(&rect.to_markup());
    }
    out
}

/// Render the standalone document: root element, palette stylesheet,
/// then the rects.
pub fn render_document(rects: &[RectDescriptor], config: &SvgConfig) -> String {
    let mut out = String::with_capacity(1024 + rects.len() * 56);
    out.push_str(&format!(
        "<svg id='{id}' xmlns='http://www.w3.org/2000/svg' preserveAspectRatio='xMinYMin meet' viewBox='0 0 {canvas} {canvas}'>",
        id = config.id,
        canvas = config.canvas,
    ));
    out.push_str(&palette::stylesheet(&config.id));
    out.push_str(&render_rects(rects));
    out.push_str("</svg>");
    out
}
