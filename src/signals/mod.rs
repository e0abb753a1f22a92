//! Crossover signal generation.

pub mod crossover;
pub mod engine;

pub use crossover::*;
pub use engine::*;
