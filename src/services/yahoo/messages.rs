//! Yahoo Finance v8 chart API payloads.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

use crate::error::{CrossoverError, Result};
use crate::models::price::PricePoint;

#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Debug, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
pub struct ChartError {
    pub code: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub meta: Option<ChartMeta>,
    /// Absent when the range holds no trading days.
    #[serde(default)]
    pub timestamp: Vec<i64>,
    #[serde(default)]
    pub indicators: Option<Indicators>,
}

#[derive(Debug, Deserialize)]
pub struct ChartMeta {
    /// Exchange offset from UTC in seconds.
    #[serde(default)]
    pub gmtoffset: i64,
}

#[derive(Debug, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteData>,
}

#[derive(Debug, Deserialize)]
pub struct QuoteData {
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}

impl ChartError {
    pub fn reason(&self) -> String {
        if self.description.is_empty() {
            self.code.clone()
        } else {
            format!("{}: {}", self.code, self.description)
        }
    }
}

impl ChartResponse {
    /// Convert the payload into an ordered daily close series.
    ///
    /// Rows with a missing or non-positive close are skipped. Timestamps are
    /// shifted into exchange time before taking the calendar date; if two rows
    /// land on the same date the later one wins.
    pub fn into_price_points(self, symbol: &str) -> Result<Vec<PricePoint>> {
        if let Some(error) = self.chart.error {
            return Err(CrossoverError::data_unavailable(symbol, error.reason()));
        }

        let result = self
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| CrossoverError::data_unavailable(symbol, "empty chart result"))?;

        let offset = result.meta.as_ref().map(|m| m.gmtoffset).unwrap_or(0);
        let closes = result
            .indicators
            .and_then(|i| i.quote.into_iter().next())
            .map(|q| q.close)
            .unwrap_or_default();

        let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for (timestamp, close) in result.timestamp.iter().zip(closes) {
            let Some(close) = close.filter(|c| c.is_finite() && *c > 0.0) else {
                continue;
            };
            let Some(date) = exchange_date(*timestamp, offset) else {
                continue;
            };
            by_date.insert(date, close);
        }

        if by_date.is_empty() {
            return Err(CrossoverError::data_unavailable(
                symbol,
                "provider returned no rows for the range",
            ));
        }

        Ok(by_date
            .into_iter()
            .map(|(date, close)| PricePoint::new(date, close))
            .collect())
    }
}

fn exchange_date(timestamp: i64, gmtoffset: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(timestamp.checked_add(gmtoffset)?, 0).map(|dt| dt.date_naive())
}
