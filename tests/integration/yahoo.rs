//! Yahoo provider against a mocked chart endpoint.

use ma_crossover::error::CrossoverError;
use ma_crossover::services::market_data::PriceSeriesProvider;
use ma_crossover::services::yahoo::{YahooFinanceProvider, YAHOO_CHART_URL};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::test_utils::{
    chart_payload, daily_prices, date, mock_chart, mock_unknown_symbol, provider_for, unix_midnight,
    CHART_PATH,
};

#[tokio::test]
async fn fetches_daily_closes_for_range() {
    let server = MockServer::start().await;
    let prices = daily_prices(date(2024, 1, 2), &[138.17, 138.92, 135.73, 135.99]);

    Mock::given(method("GET"))
        .and(path(format!("{CHART_PATH}/GOOGL")))
        .and(query_param("period1", unix_midnight(date(2024, 1, 1)).to_string()))
        .and(query_param("period2", unix_midnight(date(2024, 1, 31)).to_string()))
        .and(query_param("interval", "1d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart_payload("GOOGL", &prices)))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let points = provider
        .fetch_closes("GOOGL", date(2024, 1, 1), date(2024, 1, 31))
        .await
        .expect("fetch succeeds");

    assert_eq!(points, prices);
    assert_eq!(provider.name(), "yahoo");
}

#[tokio::test]
async fn unknown_symbol_is_data_unavailable() {
    let server = MockServer::start().await;
    mock_unknown_symbol(&server, "ZZZZ").await;

    let err = provider_for(&server)
        .fetch_closes("ZZZZ", date(2024, 1, 1), date(2024, 1, 31))
        .await
        .unwrap_err();

    match err {
        CrossoverError::DataUnavailable { symbol, reason } => {
            assert_eq!(symbol, "ZZZZ");
            assert!(reason.contains("Not Found"), "reason: {reason}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn empty_range_is_data_unavailable() {
    let server = MockServer::start().await;
    mock_chart(&server, "GOOGL", &[]).await;

    let err = provider_for(&server)
        .fetch_closes("GOOGL", date(2024, 1, 1), date(2024, 1, 2))
        .await
        .unwrap_err();

    assert!(err.is_data_unavailable());
}

#[tokio::test]
async fn server_error_is_request_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .fetch_closes("GOOGL", date(2024, 1, 1), date(2024, 1, 31))
        .await
        .unwrap_err();

    assert!(matches!(err, CrossoverError::Request(_)), "{err:?}");
}

#[tokio::test]
async fn malformed_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .fetch_closes("GOOGL", date(2024, 1, 1), date(2024, 1, 31))
        .await
        .unwrap_err();

    assert!(matches!(err, CrossoverError::Parse(_)), "{err:?}");
}

#[tokio::test]
async fn inverted_range_is_rejected_without_request() {
    let server = MockServer::start().await;

    let err = provider_for(&server)
        .fetch_closes("GOOGL", date(2024, 2, 1), date(2024, 1, 1))
        .await
        .unwrap_err();

    assert!(matches!(err, CrossoverError::InvalidDateRange { .. }));
    let requests = server.received_requests().await.expect("request recording");
    assert!(requests.is_empty());
}

#[tokio::test]
async fn chart_url_carries_range_and_interval() {
    let provider = YahooFinanceProvider::with_client(YAHOO_CHART_URL, reqwest::Client::new());
    let url = provider
        .chart_url("GOOGL", date(2024, 1, 1), date(2024, 6, 30))
        .unwrap();

    assert_eq!(
        url.as_str(),
        "https://query1.finance.yahoo.com/v8/finance/chart/GOOGL?period1=1704067200&period2=1719705600&interval=1d&events=history"
    );
}

#[tokio::test]
async fn bad_base_url_is_config_error() {
    let provider = YahooFinanceProvider::with_client("not a url", reqwest::Client::new());
    let err = provider
        .chart_url("GOOGL", date(2024, 1, 1), date(2024, 6, 30))
        .unwrap_err();
    assert!(matches!(err, CrossoverError::InvalidConfig(_)));
}
