//! `wojek.toml` configuration.
//!
//! Everything is optional; defaults reproduce the shipped avatar set
//! exactly. A full config:
//!
//! ```toml
//! [svg]
//! id = "wojek-svg"        # root element id (also the stylesheet scope)
//! canvas = 50             # viewBox is `0 0 canvas canvas`
//!
//! [hash]
//! version = 1             # leading format digit
//! rarity_percent = 10     # odds of the rarity flag, whole percent
//! traits = [4, 4, 5, 7, 9, 8, 6, 10, 7]
//! ```
//!
//! `traits` lists the number of options per category, in hash field
//! order. The default table is the stock one:
//!
//! backgrounds, characters, beards, foreheads, mouths, eyes, noses,
//! hats, accessories.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;

/// Config file discovered in the working directory when `--config` is
/// not given.
pub const DEFAULT_CONFIG_FILE: &str = "wojek.toml";

/// Stock trait table: options per category, in hash field order.
const STOCK_TRAITS: [u16; 9] = [
    4,  // backgrounds
    4,  // characters
    5,  // beards
    7,  // foreheads
    9,  // mouths
    8,  // eyes
    6,  // noses
    10, // hats
    7,  // accessories
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WojekConfig {
    pub svg: SvgConfig,
    pub hash: HashConfig,
}

/// `[svg]` section: document attributes for rendered avatars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgConfig {
    /// Root element id; the stylesheet scopes its rules under it.
    pub id: String,

    /// Square viewBox extent in grid cells.
    pub canvas: u16,
}

/// `[hash]` section: generation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashConfig {
    /// Format version digit prefixed to every hash.
    pub version: u8,

    /// Odds of rolling the rarity flag, in whole percent.
    pub rarity_percent: u8,

    /// Options per trait category, in hash field order.
    pub traits: Vec<u16>,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            id: "wojek-svg".to_string(),
            canvas: 50,
        }
    }
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            version: 1,
            rarity_percent: 10,
            traits: STOCK_TRAITS.to_vec(),
        }
    }
}

impl WojekConfig {
    /// Load configuration.
    ///
    /// An explicit `--config` path must exist; without one,
    /// `wojek.toml` in the working directory is used if present, and
    /// built-in defaults otherwise. Only a missing `wojek.toml` falls
    /// back to defaults; one that exists but cannot be read is an
    /// error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("cannot read config: {}", path.display()))?;
                Self::parse(&raw).with_context(|| format!("invalid config: {}", path.display()))?
            }
            None => match read_discovered(Path::new(DEFAULT_CONFIG_FILE))? {
                Some(raw) => Self::parse(&raw)
                    .with_context(|| format!("invalid config: {DEFAULT_CONFIG_FILE}"))?,
                None => Self::default(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn validate(&self) -> Result<()> {
        let Self { svg, hash } = self;

        if svg.id.is_empty() {
            bail!("svg.id must not be empty");
        }
        // The id lands inside quoted markup attributes and a CSS selector.
        if !svg
            .id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            bail!("svg.id may only contain ascii letters, digits, `-` and `_`");
        }
        if svg.canvas == 0 {
            bail!("svg.canvas must be at least 1");
        }
        if hash.version > 9 {
            bail!("hash.version must be a single digit, got {}", hash.version);
        }
        if hash.rarity_percent > 100 {
            bail!(
                "hash.rarity_percent must be 0-100, got {}",
                hash.rarity_percent
            );
        }
        if let Some(options) = hash.traits.iter().find(|&&n| n == 0 || n > 999) {
            bail!("hash.traits entries must be 1-999, got {options}");
        }

        Ok(())
    }
}

/// Read a config file that is allowed to be absent.
///
/// Absence is the only tolerated failure; a file that exists but
/// cannot be read (permissions, a directory at the path) is an error.
fn read_discovered(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(raw) => Ok(Some(raw)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err).with_context(|| format!("cannot read config: {}", path.display())),
    }
}
