use serde::{Deserialize, Serialize};

use super::price::{MovingAverageSeries, PricePoint};
use super::signal::{Signal, SignalKind};

/// Everything computed for one ticker in a single run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossoverAnalysis {
    pub symbol: String,
    pub prices: Vec<PricePoint>,
    pub short_ma: MovingAverageSeries,
    pub long_ma: MovingAverageSeries,
    pub signals: Vec<Signal>,
}

impl CrossoverAnalysis {
    pub fn buy_signals(&self) -> impl Iterator<Item = &Signal> {
        self.signals_of(SignalKind::Buy)
    }

    pub fn sell_signals(&self) -> impl Iterator<Item = &Signal> {
        self.signals_of(SignalKind::Sell)
    }

    fn signals_of(&self, kind: SignalKind) -> impl Iterator<Item = &Signal> {
        self.signals.iter().filter(move |s| s.kind == kind)
    }

    pub fn latest_signal(&self) -> Option<&Signal> {
        self.signals.last()
    }
}
