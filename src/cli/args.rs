//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Wojek avatar tooling CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: wojek.toml if present)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Migrate legacy rect streams to the current fragment encoding
    #[command(visible_alias = "m")]
    Migrate {
        #[command(flatten)]
        args: MigrateArgs,
    },

    /// Render fragment streams as SVG markup
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        args: RenderArgs,
    },

    /// Generate or decode attribute hashes
    #[command(visible_alias = "h")]
    Hash {
        #[command(flatten)]
        args: HashArgs,
    },
}

/// Migrate command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct MigrateArgs {
    /// Legacy stream, one record per line.
    /// Use `-` (or omit) to read from stdin.
    #[arg(value_name = "STREAM")]
    pub input: Option<String>,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Render command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Fragment stream (concatenated or comma-separated), one per line.
    /// Use `-` (or omit) to read from stdin.
    #[arg(value_name = "FRAGMENTS")]
    pub input: Option<String>,

    /// Emit the full SVG document (root element + palette stylesheet)
    /// instead of bare <rect/> elements
    #[arg(short, long)]
    pub full: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Hash command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct HashArgs {
    /// Number of hashes to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Seed for deterministic generation (default: time-based)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Starting nonce; hash k in a batch uses nonce + k
    #[arg(long, default_value_t = 0)]
    pub nonce: u64,

    /// Decode a hash instead of generating
    #[arg(short, long, value_name = "HASH", conflicts_with_all = ["count", "seed", "nonce"])]
    pub decode: Option<String>,

    /// Emit JSON records instead of plain text
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(short, long, requires = "json")]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}
