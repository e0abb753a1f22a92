//! Shared data models spanning the engine layers.

pub mod analysis;
pub mod price;
pub mod signal;

pub use analysis::CrossoverAnalysis;
pub use price::{closes, AveragePoint, MovingAverageSeries, PricePoint};
pub use signal::{Signal, SignalKind};
