//! Unit tests for signal engine

use chrono::NaiveDate;
use ma_crossover::models::price::PricePoint;
use ma_crossover::models::signal::SignalKind;
use ma_crossover::signals::engine::SignalEngine;

fn create_test_prices(closes: &[f64]) -> Vec<PricePoint> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PricePoint::new(start + chrono::Duration::days(i as i64), close))
        .collect()
}

#[test]
fn test_analysis_is_aligned() {
    let prices = create_test_prices(&[10.0, 10.0, 10.0, 10.0, 10.0, 12.0, 14.0, 16.0, 9.0, 8.0, 7.0]);
    let analysis = SignalEngine::analyze("TEST", prices.clone(), 2, 4);

    assert_eq!(analysis.symbol, "TEST");
    assert_eq!(analysis.prices, prices);
    assert_eq!(analysis.short_ma.len(), prices.len());
    assert_eq!(analysis.long_ma.len(), prices.len());
    for ((price, short), long) in prices
        .iter()
        .zip(&analysis.short_ma.points)
        .zip(&analysis.long_ma.points)
    {
        assert_eq!(price.date, short.date);
        assert_eq!(price.date, long.date);
    }

    for signal in &analysis.signals {
        assert!(prices.iter().any(|p| p.date == signal.date));
    }
}

#[test]
fn test_analysis_signals_and_accessors() {
    let prices = create_test_prices(&[10.0, 10.0, 10.0, 10.0, 10.0, 12.0, 14.0, 16.0, 9.0, 8.0, 7.0]);
    let analysis = SignalEngine::analyze("TEST", prices, 2, 4);

    assert_eq!(analysis.buy_signals().count(), 1);
    assert_eq!(analysis.sell_signals().count(), 1);
    assert_eq!(analysis.latest_signal().map(|s| s.kind), Some(SignalKind::Sell));
}

#[test]
fn test_empty_prices_produce_empty_analysis() {
    let analysis = SignalEngine::analyze("TEST", Vec::new(), 20, 50);
    assert!(analysis.prices.is_empty());
    assert!(analysis.short_ma.is_empty());
    assert!(analysis.long_ma.is_empty());
    assert!(analysis.signals.is_empty());
}

#[test]
fn test_analysis_serializes_to_json() {
    let prices = create_test_prices(&[1.0, 2.0, 3.0]);
    let analysis = SignalEngine::analyze("TEST", prices, 1, 2);

    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["symbol"], "TEST");
    assert_eq!(json["prices"][0]["date"], "2024-01-01");
    assert_eq!(json["long_ma"]["window"], 2);
    assert!(json["long_ma"]["points"][0].get("value").is_none());
}
