//! SMA (Simple Moving Average) indicator

use crate::common::math;
use crate::models::price::{closes, AveragePoint, MovingAverageSeries, PricePoint};

/// Calculate the SMA at every date of the series.
///
/// Dates before the window fills carry no value.
pub fn calculate_sma_series(prices: &[PricePoint], window: usize) -> MovingAverageSeries {
    let values = math::rolling_mean(&closes(prices), window);

    let points = prices
        .iter()
        .zip(values)
        .map(|(price, value)| AveragePoint::new(price.date, value))
        .collect();

    MovingAverageSeries::new(window, points)
}

/// Short and long SMA series over the same prices
pub fn calculate_moving_averages(
    prices: &[PricePoint],
    short_window: usize,
    long_window: usize,
) -> (MovingAverageSeries, MovingAverageSeries) {
    (
        calculate_sma_series(prices, short_window),
        calculate_sma_series(prices, long_window),
    )
}
