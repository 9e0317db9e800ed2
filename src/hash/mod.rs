//! Attribute hash model.
//!
//! A hash is the genome of one avatar, all fixed-width decimal:
//!
//! ```text
//! 1 001 003 002 004 007 005 002 008 001 000
//! | |-- one 3-digit index per trait  --| |-- rarity flag
//! version
//! ```
//!
//! (spaces for illustration only). The trait count is free; decoding
//! recovers it from the length invariant `len = 1 + 3n + 3`.

mod rng;

pub use rng::SeededRng;

use crate::codec::{self, CodecError};
use crate::config::HashConfig;

/// Decoded attribute hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeHash {
    /// Format version, a single digit. Current producers emit 1.
    pub version: u8,
    /// Index into each trait category's option list, in category order.
    pub traits: Vec<u16>,
    /// Rarity field. Current producers emit 0 or 1, the slot holds
    /// 0..=999; unknown values round-trip untouched.
    pub flag: u16,
}

impl AttributeHash {
    /// Roll a fresh hash from `rng`.
    ///
    /// Draw order is part of the format: one draw per trait category in
    /// table order, then the rarity draw. A given `(seed, nonce)` and
    /// config therefore always produce the same hash.
    pub fn generate(rng: &mut SeededRng, config: &HashConfig) -> Self {
        let traits = config
            .traits
            .iter()
            .map(|&options| rng.next_range(0, u64::from(options)) as u16)
            .collect();
        let flag = u16::from(rng.chance(config.rarity_percent));

        Self {
            version: config.version,
            traits,
            flag,
        }
    }

    pub fn is_rare(&self) -> bool {
        self.flag != 0
    }

    /// Serialize to the wire form.
    pub fn encode(&self) -> Result<String, CodecError> {
        if self.version > 9 {
            return Err(CodecError::FieldOverflow {
                value: u16::from(self.version),
                width: 1,
            });
        }

        let mut out = String::with_capacity(4 + 3 * self.traits.len());
        out.push(char::from(b'0' + self.version));
        for &index in &self.traits {
            out.push_str(&codec::encode3(index)?);
        }
        out.push_str(&codec::encode3(self.flag)?);
        Ok(out)
    }

    /// Parse the wire form.
    pub fn decode(s: &str) -> Result<Self, CodecError> {
        codec::ensure_ascii(s)?;

        // Shortest legal hash: version + rarity flag, zero traits.
        if s.len() < 4 {
            return Err(CodecError::TruncatedInput {
                offset: s.len(),
                needed: 4 - s.len(),
            });
        }
        let tail = (s.len() - 4) % 3;
        if tail != 0 {
            return Err(CodecError::MalformedField {
                offset: s.len() - tail,
                width: 3,
                found: s[s.len() - tail..].to_string(),
            });
        }

        let version = s.as_bytes()[0].wrapping_sub(b'0');
        if version > 9 {
            return Err(CodecError::MalformedField {
                offset: 0,
                width: 1,
                found: s[..1].to_string(),
            });
        }

        let count = (s.len() - 4) / 3;
        let mut traits = Vec::with_capacity(count);
        for i in 0..count {
            traits.push(codec::decode3_at(s, 1 + 3 * i)?);
        }
        let flag = codec::decode3_at(s, s.len() - 3)?;

        Ok(Self {
            version,
            traits,
            flag,
        })
    }
}
