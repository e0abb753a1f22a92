//! Yahoo Finance chart API integration.

pub mod messages;
pub mod provider;

pub use provider::{YahooFinanceProvider, YAHOO_CHART_URL};
