//! Error type shared by the loader, the pipeline and the renderers.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CrossoverError {
    /// The provider knows nothing about the symbol or returned no rows for the range.
    #[error("no price data available for {symbol}: {reason}")]
    DataUnavailable { symbol: String, reason: String },

    #[error("invalid date range: {start} to {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("failed to parse provider response: {0}")]
    Parse(String),

    #[error("failed to write output: {0}")]
    Output(String),
}

impl CrossoverError {
    pub fn data_unavailable(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DataUnavailable {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }

    pub fn is_data_unavailable(&self) -> bool {
        matches!(self, Self::DataUnavailable { .. })
    }
}

impl From<reqwest::Error> for CrossoverError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Parse(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CrossoverError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<std::io::Error> for CrossoverError {
    fn from(err: std::io::Error) -> Self {
        Self::Output(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CrossoverError>;
