//! Run configuration.
//!
//! Defaults describe the classic 20/50 day crossover over the last six months
//! of GOOGL. Any field can be overridden from the environment (a `.env` file is
//! loaded by the binary before this runs).

use std::env;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use tracing::warn;

use crate::error::{CrossoverError, Result};

pub const DEFAULT_TICKER: &str = "GOOGL";
pub const DEFAULT_SHORT_WINDOW: usize = 20;
pub const DEFAULT_LONG_WINDOW: usize = 50;
pub const DEFAULT_LOOKBACK_DAYS: i64 = 180;
pub const DEFAULT_FETCH_TIMEOUT_SECONDS: u64 = 30;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Deployment environment name, lowercased (`sandbox` when unset).
pub fn get_environment() -> String {
    env::var("APP_ENV")
        .or_else(|_| env::var("ENVIRONMENT"))
        .unwrap_or_else(|_| "sandbox".to_string())
        .to_lowercase()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Debug, Clone, PartialEq)]
pub struct CrossoverConfig {
    pub ticker: String,
    pub short_window: usize,
    pub long_window: usize,
    pub start_date: NaiveDate,
    /// Exclusive upper bound of the fetch.
    pub end_date: NaiveDate,
    pub show_chart: bool,
    pub fetch_timeout: Duration,
    /// Overrides the Yahoo chart endpoint; `None` uses the public API.
    pub yahoo_base_url: Option<String>,
}

impl Default for CrossoverConfig {
    fn default() -> Self {
        Self::ending_on(today())
    }
}

impl CrossoverConfig {
    /// Default configuration whose lookback window ends on `end_date`.
    pub fn ending_on(end_date: NaiveDate) -> Self {
        Self {
            ticker: DEFAULT_TICKER.to_string(),
            short_window: DEFAULT_SHORT_WINDOW,
            long_window: DEFAULT_LONG_WINDOW,
            start_date: end_date - chrono::Duration::days(DEFAULT_LOOKBACK_DAYS),
            end_date,
            show_chart: true,
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECONDS),
            yahoo_base_url: None,
        }
    }

    pub fn with_ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = ticker.into();
        self
    }

    pub fn with_windows(mut self, short_window: usize, long_window: usize) -> Self {
        self.short_window = short_window;
        self.long_window = long_window;
        self
    }

    pub fn with_date_range(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    pub fn with_show_chart(mut self, show_chart: bool) -> Self {
        self.show_chart = show_chart;
        self
    }

    /// Build from the process environment.
    ///
    /// Recognised variables: `TICKER`, `SHORT_WINDOW`, `LONG_WINDOW`,
    /// `LOOKBACK_DAYS`, `START_DATE`, `END_DATE`, `SHOW_CHART`,
    /// `FETCH_TIMEOUT_SECONDS`, `YAHOO_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok(), today())
    }

    /// Build from an arbitrary key lookup, resolving relative dates against `today`.
    pub fn from_lookup<F>(lookup: F, today: NaiveDate) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let end_date = match get("END_DATE") {
            Some(raw) => parse_date("END_DATE", &raw)?,
            None => today,
        };

        let mut config = Self::ending_on(end_date);

        if let Some(ticker) = get("TICKER") {
            config.ticker = ticker.to_uppercase();
        }
        if let Some(raw) = get("SHORT_WINDOW") {
            config.short_window = parse_number("SHORT_WINDOW", &raw)?;
        }
        if let Some(raw) = get("LONG_WINDOW") {
            config.long_window = parse_number("LONG_WINDOW", &raw)?;
        }
        if let Some(raw) = get("LOOKBACK_DAYS") {
            let days: i64 = parse_number("LOOKBACK_DAYS", &raw)?;
            config.start_date = chrono::Duration::try_days(days)
                .and_then(|lookback| end_date.checked_sub_signed(lookback))
                .ok_or_else(|| {
                    CrossoverError::InvalidConfig(format!(
                        "LOOKBACK_DAYS: '{raw}' reaches outside the supported date range"
                    ))
                })?;
        }
        if let Some(raw) = get("START_DATE") {
            config.start_date = parse_date("START_DATE", &raw)?;
        }
        if let Some(raw) = get("SHOW_CHART") {
            config.show_chart = parse_bool("SHOW_CHART", &raw)?;
        }
        if let Some(raw) = get("FETCH_TIMEOUT_SECONDS") {
            config.fetch_timeout = Duration::from_secs(parse_number("FETCH_TIMEOUT_SECONDS", &raw)?);
        }
        config.yahoo_base_url = get("YAHOO_BASE_URL");

        Ok(config)
    }

    /// Check the configuration against today's date.
    pub fn validate(&self) -> Result<()> {
        self.validate_as_of(today())
    }

    pub fn validate_as_of(&self, today: NaiveDate) -> Result<()> {
        if self.ticker.trim().is_empty() {
            return Err(CrossoverError::InvalidConfig("ticker must not be empty".to_string()));
        }
        if self.short_window == 0 || self.long_window == 0 {
            return Err(CrossoverError::InvalidConfig(format!(
                "moving average windows must be positive (short={}, long={})",
                self.short_window, self.long_window
            )));
        }
        if self.short_window >= self.long_window {
            warn!(
                short_window = self.short_window,
                long_window = self.long_window,
                "short window is not shorter than long window; crossovers will be inverted"
            );
        }
        validate_range(self.start_date, self.end_date, today)
    }
}

/// A fetch range must be non-empty and must not reach past `today`.
pub fn validate_range(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> Result<()> {
    if start >= end || end > today {
        return Err(CrossoverError::InvalidDateRange { start, end });
    }
    Ok(())
}

fn parse_date(key: &str, raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| {
        CrossoverError::InvalidConfig(format!("{key}: expected YYYY-MM-DD, got '{raw}' ({e})"))
    })
}

fn parse_number<T>(key: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse()
        .map_err(|e| CrossoverError::InvalidConfig(format!("{key}: '{raw}' ({e})")))
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(CrossoverError::InvalidConfig(format!(
            "{key}: expected a boolean, got '{raw}'"
        ))),
    }
}
