//! Common utilities shared across CLI commands.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::log;

/// Resolve the positional input of a stream command into records.
///
/// A literal argument is one record; `-` or no argument reads records
/// from stdin, one per line. Blank lines are skipped either way.
pub fn collect_records(input: Option<&str>) -> Result<Vec<String>> {
    match input {
        Some(arg) if arg != "-" => {
            let record = arg.trim();
            if record.is_empty() {
                Ok(vec![])
            } else {
                Ok(vec![record.to_string()])
            }
        }
        _ => read_records_from_stdin(),
    }
}

/// Read records from stdin, one per line
fn read_records_from_stdin() -> Result<Vec<String>> {
    let stdin = io::stdin();
    let mut records = Vec::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            records.push(trimmed.to_string());
        }
    }

    Ok(records)
}

/// Write command output to a file (with a notice) or to stdout.
pub fn write_output(formatted: &str, output: Option<&Path>, module: &str) -> Result<()> {
    if let Some(path) = output {
        let mut file = fs::File::create(path)
            .with_context(|| format!("cannot create output file: {}", path.display()))?;
        writeln!(file, "{formatted}")?;
        log!(module; "wrote output to {}", path.display());
    } else {
        println!("{formatted}");
    }

    Ok(())
}
