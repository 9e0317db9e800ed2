//! `render` command: fragment streams in, SVG markup out.

use anyhow::{Context, Result};

use crate::cli::args::RenderArgs;
use crate::cli::common;
use crate::config::WojekConfig;
use crate::debug;
use crate::svg;

pub fn run(args: &RenderArgs, config: &WojekConfig) -> Result<()> {
    let records = common::collect_records(args.input.as_deref())?;

    let mut documents = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        let rects = svg::parse_fragments(record)
            .with_context(|| format!("record {}: cannot parse fragments", i + 1))?;
        debug!("render"; "record {}: {} rect(s)", i + 1, rects.len());

        documents.push(if args.full {
            svg::render_document(&rects, &config.svg)
        } else {
            svg::render_rects(&rects)
        });
    }

    common::write_output(&documents.join("\n"), args.output.as_deref(), "render")
}
