//! Yahoo Finance daily close provider

use std::time::Duration;

use chrono::{NaiveDate, NaiveTime};
use reqwest::StatusCode;
use tracing::{debug, info, warn};
use url::Url;

use super::messages::ChartResponse;
use crate::config::CrossoverConfig;
use crate::error::{CrossoverError, Result};
use crate::models::price::PricePoint;
use crate::services::market_data::PriceSeriesProvider;

pub const YAHOO_CHART_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

#[derive(Debug, Clone)]
pub struct YahooFinanceProvider {
    client: reqwest::Client,
    base_url: String,
}

impl YahooFinanceProvider {
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self::with_client(YAHOO_CHART_URL, client))
    }

    /// Use a caller-built client, e.g. one pointed at a mock server.
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn from_config(config: &CrossoverConfig) -> Result<Self> {
        let provider = Self::with_timeout(config.fetch_timeout)?;
        Ok(match &config.yahoo_base_url {
            Some(base_url) => provider.with_base_url(base_url.clone()),
            None => provider,
        })
    }

    /// `{base}/{symbol}?period1=..&period2=..&interval=1d`; `end` is exclusive.
    pub fn chart_url(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            CrossoverError::InvalidConfig(format!("bad Yahoo base URL '{}': {e}", self.base_url))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                CrossoverError::InvalidConfig(format!("Yahoo base URL '{}' cannot take a path", self.base_url))
            })?
            .pop_if_empty()
            .push(symbol);

        url.query_pairs_mut()
            .append_pair("period1", &unix_midnight(start).to_string())
            .append_pair("period2", &unix_midnight(end).to_string())
            .append_pair("interval", "1d")
            .append_pair("events", "history");

        Ok(url)
    }
}

fn unix_midnight(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

#[async_trait::async_trait]
impl PriceSeriesProvider for YahooFinanceProvider {
    async fn fetch_closes(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PricePoint>> {
        if start >= end {
            return Err(CrossoverError::InvalidDateRange { start, end });
        }

        let url = self.chart_url(symbol, start, end)?;
        info!(symbol, %start, %end, "Fetching daily closes from Yahoo Finance");
        debug!(url = %url, "Yahoo chart request");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            let body = response.text().await.unwrap_or_default();
            let reason = serde_json::from_str::<ChartResponse>(&body)
                .ok()
                .and_then(|r| r.chart.error)
                .map(|e| e.reason())
                .unwrap_or_else(|| format!("HTTP {status}"));
            warn!(symbol, %reason, "Yahoo reports unknown symbol");
            return Err(CrossoverError::data_unavailable(symbol, reason));
        }

        if !status.is_success() {
            return Err(CrossoverError::Request(format!(
                "Yahoo chart request for {symbol} returned HTTP {status}"
            )));
        }

        let body = response.text().await?;
        let payload: ChartResponse = serde_json::from_str(&body)?;
        let points = payload.into_price_points(symbol)?;

        info!(symbol, rows = points.len(), "Fetched daily closes");
        Ok(points)
    }

    fn name(&self) -> &'static str {
        "yahoo"
    }
}
