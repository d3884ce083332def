use crate::error::{PufError, Result};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// Minimum expected support, either absolute or relative to the database size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MinSupport {
    Count(u64),
    Fraction(f64),
}

impl MinSupport {
    /// Absolute threshold for a database of `num_transactions` transactions.
    pub fn resolve(&self, num_transactions: usize) -> Result<f64> {
        match *self {
            MinSupport::Count(count) => Ok(count as f64),
            MinSupport::Fraction(fraction) => {
                if !fraction.is_finite() || fraction < 0.0 {
                    return Err(PufError::InvalidMinSupport(format!(
                        "fraction must be finite and non-negative, got {fraction}"
                    )));
                }
                Ok(fraction * num_transactions as f64)
            }
        }
    }
}

impl From<u64> for MinSupport {
    fn from(count: u64) -> Self {
        MinSupport::Count(count)
    }
}

impl From<f64> for MinSupport {
    fn from(fraction: f64) -> Self {
        MinSupport::Fraction(fraction)
    }
}

/// A value containing a decimal point is a fraction, anything else an integer count.
impl FromStr for MinSupport {
    type Err = PufError;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim();
        if value.contains('.') {
            value
                .parse::<f64>()
                .map(MinSupport::Fraction)
                .map_err(|e| PufError::InvalidMinSupport(format!("{value:?}: {e}")))
        } else {
            value
                .parse::<u64>()
                .map(MinSupport::Count)
                .map_err(|e| PufError::InvalidMinSupport(format!("{value:?}: {e}")))
        }
    }
}

impl fmt::Display for MinSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinSupport::Count(count) => write!(f, "{count}"),
            MinSupport::Fraction(fraction) => write!(f, "{fraction:?}"),
        }
    }
}

impl<'de> Deserialize<'de> for MinSupport {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Count(u64),
            Fraction(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Count(count) => Ok(MinSupport::Count(count)),
            Raw::Fraction(fraction) => Ok(MinSupport::Fraction(fraction)),
            Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

fn default_separator() -> String {
    "\t".to_string()
}

/// Miner configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MinerConfig {
    pub min_support: MinSupport,
    /// Item separator of the line formats
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl MinerConfig {
    pub fn new(min_support: impl Into<MinSupport>) -> Self {
        Self {
            min_support: min_support.into(),
            separator: default_separator(),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}
