//! Console report and chart output.

pub mod chart;
pub mod console;

pub use chart::{ChartRenderer, NoopChart, TerminalChart};
pub use console::{format_banner, format_signal_line, format_signals, NO_DATA_MESSAGE};
