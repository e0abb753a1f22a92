//! Application entry points

pub mod pipeline;

pub use pipeline::*;
