//! Moving average crossover signals for daily stock prices.
//!
//! The pipeline loads closing prices through a [`services::PriceSeriesProvider`],
//! computes a short and a long simple moving average, flags the dates where
//! the short average crosses the long one and reports them as buy/sell
//! signals, optionally with a terminal chart.

pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod report;
pub mod services;
pub mod signals;

pub use config::CrossoverConfig;
pub use error::{CrossoverError, Result};
