//! Console report formatting.

use crate::config::CrossoverConfig;
use crate::models::signal::{Signal, SignalKind};

const RULE_WIDTH: usize = 60;

pub const NO_DATA_MESSAGE: &str =
    "Error: No data retrieved. Please check the ticker symbol and try again.";

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Configuration banner printed before the fetch.
pub fn format_banner(config: &CrossoverConfig) -> String {
    let rule = rule();
    let lines = [
        rule.clone(),
        "MOVING AVERAGE CROSSOVER STRATEGY".to_string(),
        rule.clone(),
        format!("Ticker: {}", config.ticker),
        format!("Short-term MA: {} days", config.short_window),
        format!("Long-term MA: {} days", config.long_window),
        format!(
            "Date Range: {} to {}",
            config.start_date.format("%Y-%m-%d"),
            config.end_date.format("%Y-%m-%d")
        ),
        rule,
        String::new(),
    ];
    lines.join("\n") + "\n"
}

/// `Date: 2024-03-01 | Price: $123.45`
pub fn format_signal_line(signal: &Signal) -> String {
    format!(
        "Date: {} | Price: ${:.2}",
        signal.date.format("%Y-%m-%d"),
        signal.price
    )
}

/// Buy signals first, then sell signals, each under its own heading.
pub fn format_signals(signals: &[Signal]) -> String {
    let rule = rule();
    let mut lines = Vec::new();

    for (kind, heading) in [
        (SignalKind::Buy, "BUY SIGNALS (Golden Cross - Short MA crosses above Long MA)"),
        (SignalKind::Sell, "SELL SIGNALS (Death Cross - Short MA crosses below Long MA)"),
    ] {
        lines.push(String::new());
        lines.push(rule.clone());
        lines.push(heading.to_string());
        lines.push(rule.clone());
        lines.extend(section_lines(signals, kind));
    }

    lines.push(rule);
    lines.push(String::new());
    lines.join("\n") + "\n"
}

fn section_lines(signals: &[Signal], kind: SignalKind) -> Vec<String> {
    let lines: Vec<String> = signals
        .iter()
        .filter(|s| s.kind == kind)
        .map(format_signal_line)
        .collect();

    if !lines.is_empty() {
        return lines;
    }

    let label = match kind {
        SignalKind::Buy => "buy",
        SignalKind::Sell => "sell",
    };
    vec![format!("No {label} signals generated in this period.")]
}
