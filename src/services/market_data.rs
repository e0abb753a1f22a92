//! Market data provider interface.

use chrono::NaiveDate;

use crate::error::{CrossoverError, Result};
use crate::models::price::PricePoint;

/// Source of daily closing prices.
///
/// Implementations make a single attempt per call and return points sorted by
/// date, one per trading day, with `start <= date < end`. An unknown symbol or
/// an empty range is reported as [`CrossoverError::DataUnavailable`].
#[async_trait::async_trait]
pub trait PriceSeriesProvider: Send + Sync {
    async fn fetch_closes(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PricePoint>>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// Serves a fixed, in-memory price series regardless of symbol.
#[derive(Debug, Clone, Default)]
pub struct StaticPriceSeriesProvider {
    points: Vec<PricePoint>,
}

impl StaticPriceSeriesProvider {
    pub fn new(mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.date);
        points.dedup_by_key(|p| p.date);
        Self { points }
    }
}

#[async_trait::async_trait]
impl PriceSeriesProvider for StaticPriceSeriesProvider {
    async fn fetch_closes(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PricePoint>> {
        let points: Vec<PricePoint> = self
            .points
            .iter()
            .filter(|p| p.date >= start && p.date < end)
            .copied()
            .collect();

        if points.is_empty() {
            return Err(CrossoverError::data_unavailable(
                symbol,
                format!("no rows between {start} and {end}"),
            ));
        }

        Ok(points)
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
