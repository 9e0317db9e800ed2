//! `migrate` command: legacy streams in, fragment streams out.

use anyhow::{Context, Result};

use crate::cli::args::MigrateArgs;
use crate::cli::common;
use crate::debug;
use crate::migrate;

pub fn run(args: &MigrateArgs) -> Result<()> {
    let records = common::collect_records(args.input.as_deref())?;

    let mut lines = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        let migrated = migrate::migrate(record)
            .with_context(|| format!("record {}: cannot migrate", i + 1))?;
        debug!(
            "migrate";
            "record {}: {} -> {} chars",
            i + 1,
            record.len(),
            migrated.len()
        );
        lines.push(migrated);
    }

    common::write_output(&lines.join("\n"), args.output.as_deref(), "migrate")
}
