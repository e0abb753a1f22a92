//! Unit tests for console report formatting

use chrono::NaiveDate;
use ma_crossover::config::CrossoverConfig;
use ma_crossover::models::signal::{Signal, SignalKind};
use ma_crossover::report::console::{format_banner, format_signal_line, format_signals};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn rule() -> String {
    "=".repeat(60)
}

#[test]
fn test_signal_line_format() {
    let signal = Signal::new(date(2024, 3, 5), 138.456, SignalKind::Buy);
    assert_eq!(format_signal_line(&signal), "Date: 2024-03-05 | Price: $138.46");
}

#[test]
fn test_banner_lists_configuration() {
    let config = CrossoverConfig::ending_on(date(2024, 6, 30))
        .with_ticker("MSFT")
        .with_windows(10, 30);

    let banner = format_banner(&config);
    let expected = format!(
        "{r}\nMOVING AVERAGE CROSSOVER STRATEGY\n{r}\nTicker: MSFT\nShort-term MA: 10 days\nLong-term MA: 30 days\nDate Range: 2024-01-02 to 2024-06-30\n{r}\n\n",
        r = rule()
    );
    assert_eq!(banner, expected);
}

#[test]
fn test_signals_grouped_buy_then_sell() {
    let signals = vec![
        Signal::new(date(2024, 1, 10), 101.0, SignalKind::Sell),
        Signal::new(date(2024, 2, 10), 95.5, SignalKind::Buy),
        Signal::new(date(2024, 3, 10), 110.25, SignalKind::Sell),
    ];

    let text = format_signals(&signals);
    let expected = format!(
        "\n{r}\nBUY SIGNALS (Golden Cross - Short MA crosses above Long MA)\n{r}\n\
Date: 2024-02-10 | Price: $95.50\n\
\n{r}\nSELL SIGNALS (Death Cross - Short MA crosses below Long MA)\n{r}\n\
Date: 2024-01-10 | Price: $101.00\n\
Date: 2024-03-10 | Price: $110.25\n\
{r}\n\n",
        r = rule()
    );
    assert_eq!(text, expected);
}

#[test]
fn test_no_signals_notice() {
    let text = format_signals(&[]);
    assert!(text.contains("No buy signals generated in this period."));
    assert!(text.contains("No sell signals generated in this period."));
    assert!(!text.contains("Date:"));
}

#[test]
fn test_only_buys_reports_empty_sell_section() {
    let signals = vec![Signal::new(date(2024, 2, 10), 95.5, SignalKind::Buy)];
    let text = format_signals(&signals);
    assert!(text.contains("Date: 2024-02-10 | Price: $95.50"));
    assert!(!text.contains("No buy signals"));
    assert!(text.contains("No sell signals generated in this period."));
}
