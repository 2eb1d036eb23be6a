//! Wire-level tests against a mocked ISS server.

use httpmock::prelude::*;
use serde_json::json;

use vklad_core::{ErrorKind, HistoryProvider, HistoryRequest, QuoteProvider, Symbol, VkladError};
use vklad_moex::MoexConnector;

fn connector(server: &MockServer) -> MoexConnector {
    MoexConnector::builder().base_url(server.base_url()).build()
}

fn symbol(raw: &str) -> Symbol {
    Symbol::new(raw).unwrap()
}

#[tokio::test]
async fn history_hits_the_board_path_with_limit_and_user_agent() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/history/engines/stock/markets/shares/boards/TQBR/securities/SBER.json")
                .query_param("limit", "365")
                .header("user-agent", "Mozilla/5.0");
            then.status(200).json_body(json!({
                "history": {
                    "columns": ["BOARDID", "TRADEDATE", "CLOSE"],
                    "data": [
                        ["TQBR", "2023-01-01", 100.0],
                        ["TQBR", "2024-01-01", 121.0]
                    ]
                }
            }));
        })
        .await;

    let series = connector(&server)
        .history(&symbol("SBER"), HistoryRequest::default())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(series.len(), 2);
    assert_eq!(series.first().close, 100.0);
    assert_eq!(series.last().close, 121.0);
}

#[tokio::test]
async fn history_honors_a_custom_limit_and_board() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/history/engines/stock/markets/shares/boards/SMAL/securities/GAZP.json")
                .query_param("limit", "30");
            then.status(200).json_body(json!({
                "history": {
                    "columns": ["TRADEDATE", "CLOSE"],
                    "data": [["2024-01-01", 150.0], ["2024-01-31", 155.0]]
                }
            }));
        })
        .await;

    let connector = MoexConnector::builder()
        .base_url(server.base_url())
        .board("SMAL")
        .build();
    let series = connector
        .history(&symbol("GAZP"), HistoryRequest { limit: 30 })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(series.len(), 2);
}

#[tokio::test]
async fn quote_reads_last_from_marketdata() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/engines/stock/markets/shares/boards/TQBR/securities/SBER.json")
                .header("user-agent", "Mozilla/5.0");
            then.status(200).json_body(json!({
                "marketdata": {
                    "columns": ["BOARDID", "LAST", "OPEN"],
                    "data": [["TQBR", 250.0, 248.5]]
                }
            }));
        })
        .await;

    let quote = connector(&server).quote(&symbol("SBER")).await.unwrap();

    mock.assert_async().await;
    assert_eq!(quote.last_price(), 250.0);
}

#[tokio::test]
async fn zero_last_price_is_a_data_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path_includes("/securities/YNDX.json");
            then.status(200).json_body(json!({
                "marketdata": {
                    "columns": ["LAST"],
                    "data": [[0.0]]
                }
            }));
        })
        .await;

    let err = connector(&server)
        .quote(&symbol("YNDX"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Data);
}

#[tokio::test]
async fn empty_history_table_is_a_data_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path_includes("/securities/NONE.json");
            then.status(200).json_body(json!({
                "history": {
                    "columns": ["TRADEDATE", "CLOSE"],
                    "data": []
                }
            }));
        })
        .await;

    let err = connector(&server)
        .history(&symbol("NONE"), HistoryRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Data);
}

#[tokio::test]
async fn missing_close_column_is_a_format_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path_includes("/securities/SBER.json");
            then.status(200).json_body(json!({
                "history": {
                    "columns": ["TRADEDATE", "OPEN"],
                    "data": [["2023-01-01", 99.0]]
                }
            }));
        })
        .await;

    let err = connector(&server)
        .history(&symbol("SBER"), HistoryRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, VkladError::Format(_)));
    assert!(err.to_string().contains("CLOSE"));
}

#[tokio::test]
async fn non_json_body_is_a_format_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path_includes("/securities/SBER.json");
            then.status(200).body("<html>maintenance</html>");
        })
        .await;

    let err = connector(&server).quote(&symbol("SBER")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[tokio::test]
async fn server_error_status_is_a_network_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path_includes("/securities/SBER.json");
            then.status(500).body("internal error");
        })
        .await;

    let err = connector(&server)
        .history(&symbol("SBER"), HistoryRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    // Port 1 is never listening.
    let connector = MoexConnector::builder()
        .base_url("http://127.0.0.1:1")
        .build();
    let err = connector.quote(&symbol("SBER")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
}
