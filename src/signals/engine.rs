//! Signal evaluation engine: averages in, crossovers out.

use tracing::debug;

use crate::indicators::trend::calculate_moving_averages;
use crate::models::analysis::CrossoverAnalysis;
use crate::models::price::PricePoint;
use crate::signals::crossover::CrossoverDetector;

pub struct SignalEngine;

impl SignalEngine {
    /// Compute both averages over `prices` and detect crossovers between them.
    ///
    /// Pure and deterministic; the same prices always yield the same analysis.
    pub fn analyze(
        symbol: &str,
        prices: Vec<PricePoint>,
        short_window: usize,
        long_window: usize,
    ) -> CrossoverAnalysis {
        let (short_ma, long_ma) = calculate_moving_averages(&prices, short_window, long_window);
        let signals = CrossoverDetector::detect(&prices, &short_ma, &long_ma);

        debug!(
            symbol,
            points = prices.len(),
            short_window,
            long_window,
            short_defined = short_ma.defined_count(),
            long_defined = long_ma.defined_count(),
            signals = signals.len(),
            "SignalEngine: analysis computed"
        );

        CrossoverAnalysis {
            symbol: symbol.to_string(),
            prices,
            short_ma,
            long_ma,
            signals,
        }
    }
}
