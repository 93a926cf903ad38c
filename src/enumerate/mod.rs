//! Candidate enumeration over a fixed symbol alphabet
//!
//! Candidates are produced shortest first; within one length they follow
//! odometer order, the rightmost symbol varying fastest.

mod generator;
pub mod ordinal;

pub use generator::Candidates;
pub use ordinal::{candidate_at, encode};

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{BrutalForceError, Result};
use crate::validation_error;

const DIGITS: &str = "0123456789";
const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const PUNCTUATION: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?";

/// Built-in symbol sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AlphabetPreset {
    /// 0-9
    Digits,
    /// a-z
    Lower,
    /// 0-9, a-z, A-Z
    Alnum,
    /// 0-9, a-z, A-Z and 26 punctuation marks
    #[default]
    Full,
}

impl AlphabetPreset {
    pub fn symbols(&self) -> String {
        match self {
            AlphabetPreset::Digits => DIGITS.to_string(),
            AlphabetPreset::Lower => LOWER.to_string(),
            AlphabetPreset::Alnum => [DIGITS, LOWER, UPPER].concat(),
            AlphabetPreset::Full => [DIGITS, LOWER, UPPER, PUNCTUATION].concat(),
        }
    }
}

impl fmt::Display for AlphabetPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlphabetPreset::Digits => write!(f, "digits"),
            AlphabetPreset::Lower => write!(f, "lower"),
            AlphabetPreset::Alnum => write!(f, "alnum"),
            AlphabetPreset::Full => write!(f, "full"),
        }
    }
}

/// Ordered set of unique symbols; defines both enumeration order and numeral base
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from a symbol string, rejecting empty input and duplicates
    pub fn new(symbols: &str) -> Result<Self> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.is_empty() {
            return Err(BrutalForceError::validation("alphabet must contain at least one symbol"));
        }

        let mut seen = HashSet::with_capacity(symbols.len());
        for &symbol in &symbols {
            if !seen.insert(symbol) {
                return Err(validation_error!("alphabet repeats symbol '{}'", symbol));
            }
        }

        Ok(Self { symbols })
    }

    pub fn preset(preset: AlphabetPreset) -> Self {
        Self {
            symbols: preset.symbols().chars().collect(),
        }
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Numeral base (alphabet size)
    pub fn base(&self) -> usize {
        self.symbols.len()
    }

    /// 0-based offset of `symbol`, if present
    pub fn position(&self, symbol: char) -> Option<usize> {
        self.symbols.iter().position(|&s| s == symbol)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.position(symbol).is_some()
    }

    /// Number of candidates of the given length, `None` once it exceeds `u128`
    pub fn total_combinations(&self, length: usize) -> Option<u128> {
        let length = u32::try_from(length).ok()?;
        (self.base() as u128).checked_pow(length)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::preset(AlphabetPreset::default())
    }
}

impl FromStr for Alphabet {
    type Err = BrutalForceError;

    /// Accepts a preset name or a literal symbol string
    fn from_str(s: &str) -> Result<Self> {
        match AlphabetPreset::from_str(s, true) {
            Ok(preset) => Ok(Self::preset(preset)),
            Err(_) => Self::new(s),
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}
