//! `hash` command: roll new attribute hashes or decode existing ones.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::args::HashArgs;
use crate::cli::common;
use crate::config::HashConfig;
use crate::debug;
use crate::hash::{AttributeHash, SeededRng};

/// One record of `hash` output.
#[derive(Debug, Serialize)]
struct HashRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    nonce: Option<u64>,
    hash: String,
    version: u8,
    traits: Vec<u16>,
    rare: bool,
}

pub fn run(args: &HashArgs, config: &HashConfig) -> Result<()> {
    let records = match args.decode {
        Some(ref wire) => vec![decode_record(wire)?],
        None => generate_records(args, config)?,
    };

    let formatted = if args.json {
        if args.pretty {
            serde_json::to_string_pretty(&records)?
        } else {
            serde_json::to_string(&records)?
        }
    } else if args.decode.is_some() {
        describe(&records)
    } else {
        records
            .iter()
            .map(|r| r.hash.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    };

    common::write_output(&formatted, args.output.as_deref(), "hash")
}

fn generate_records(args: &HashArgs, config: &HashConfig) -> Result<Vec<HashRecord>> {
    let seed = args.seed.unwrap_or_else(entropy_seed);
    debug!("hash"; "seed {seed}, base nonce {}, count {}", args.nonce, args.count);

    let mut records = Vec::with_capacity(args.count);
    for k in 0..args.count as u64 {
        let nonce = args.nonce.wrapping_add(k);
        let mut rng = SeededRng::new(seed.wrapping_add(nonce));
        let hash = AttributeHash::generate(&mut rng, config);
        let wire = hash.encode().context("cannot encode generated hash")?;
        let rare = hash.is_rare();

        records.push(HashRecord {
            nonce: Some(nonce),
            hash: wire,
            version: hash.version,
            traits: hash.traits,
            rare,
        });
    }

    Ok(records)
}

fn decode_record(wire: &str) -> Result<HashRecord> {
    let wire = wire.trim();
    let hash = AttributeHash::decode(wire).context("cannot decode hash")?;
    let rare = hash.is_rare();

    Ok(HashRecord {
        nonce: None,
        hash: wire.to_string(),
        version: hash.version,
        traits: hash.traits,
        rare,
    })
}

/// Plain-text form of decoded records.
fn describe(records: &[HashRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() * 3);
    for record in records {
        lines.push(format!("version: {}", record.version));
        lines.push(format!(
            "traits: {}",
            record
                .traits
                .iter()
                .map(u16::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        ));
        lines.push(format!("rare: {}", record.rare));
    }
    lines.join("\n")
}

/// Time-based fallback seed for unseeded runs.
fn entropy_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    let time = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    u64::from(std::process::id()).wrapping_mul(time)
}
