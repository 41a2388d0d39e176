//! Ticker Symbol
//! Normalized, validated security identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TickerError {
    #[error("Stock ticker cannot be empty.")]
    Empty,
    #[error("Stock ticker should only contain alphanumeric characters.")]
    NotAlphanumeric(String),
}

/// Uppercase ASCII alphanumeric symbol such as `AAPL` or `BRK1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Trim, uppercase and validate user input.
    pub fn parse(input: &str) -> Result<Self, TickerError> {
        let symbol = input.trim();
        if symbol.is_empty() {
            return Err(TickerError::Empty);
        }
        if !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(TickerError::NotAlphanumeric(symbol.to_string()));
        }
        Ok(Self(symbol.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Ticker {
    type Error = TickerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Ticker> for String {
    fn from(ticker: Ticker) -> Self {
        ticker.0
    }
}
