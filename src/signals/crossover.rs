//! Moving average crossover detection.
//!
//! A signal fires when the sign of `short - long` flips between two
//! consecutive dates on which both averages are defined:
//!
//! - at/below zero to strictly above: Buy (golden cross)
//! - at/above zero to strictly below: Sell (death cross)
//!
//! Staying at zero, or staying on one side, emits nothing. Leaving zero for
//! either side counts as a crossing.

use crate::models::price::{MovingAverageSeries, PricePoint};
use crate::models::signal::{Signal, SignalKind};

pub struct CrossoverDetector;

impl CrossoverDetector {
    /// Classify one step given the previous and current `short - long` spreads.
    pub fn classify(diff_prev: f64, diff_curr: f64) -> Option<SignalKind> {
        if diff_prev <= 0.0 && diff_curr > 0.0 {
            Some(SignalKind::Buy)
        } else if diff_prev >= 0.0 && diff_curr < 0.0 {
            Some(SignalKind::Sell)
        } else {
            None
        }
    }

    /// Scan the aligned series once and return every crossover in date order.
    ///
    /// Inputs of different lengths are only scanned over their common prefix.
    pub fn detect(
        prices: &[PricePoint],
        short: &MovingAverageSeries,
        long: &MovingAverageSeries,
    ) -> Vec<Signal> {
        let n = prices.len().min(short.len()).min(long.len());
        let mut signals = Vec::new();

        for i in 1..n {
            let (Some(diff_prev), Some(diff_curr)) =
                (Self::spread(short, long, i - 1), Self::spread(short, long, i))
            else {
                continue;
            };

            if let Some(kind) = Self::classify(diff_prev, diff_curr) {
                let price = &prices[i];
                signals.push(Signal::new(price.date, price.close, kind));
            }
        }

        signals
    }

    fn spread(short: &MovingAverageSeries, long: &MovingAverageSeries, index: usize) -> Option<f64> {
        Some(short.value_at(index)? - long.value_at(index)?)
    }
}
