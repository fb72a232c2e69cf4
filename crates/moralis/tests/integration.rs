//! Client tests against a local mock vendor.

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use omnifolio_common::error::AppError;
use omnifolio_moralis::client::MoralisClient;

const WALLET: &str = "0x47C7c4E3b59D2C03E98bf54C104e7481474842E5";

fn tokens_page() -> serde_json::Value {
    json!({
        "cursor": null,
        "page": 1,
        "page_size": 100,
        "result": [
            {
                "token_address": "0xdac17f958d2ee523a2206206994597c13d831ec7",
                "symbol": "USDT",
                "name": "Tether USD",
                "decimals": 6,
                "balance": "118834442",
                "balance_formatted": "118.834442",
                "usd_price": 1.0006,
                "usd_value": 118.905,
                "native_token": false,
                "possible_spam": false
            }
        ]
    })
}

#[tokio::test]
async fn test_wallet_tokens_decodes_result_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/wallets/{WALLET}/tokens")))
        .and(query_param("chain", "eth"))
        .and(header("X-API-Key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tokens_page()))
        .expect(1)
        .mount(&server)
        .await;

    let client = MoralisClient::new(server.uri(), Some("test-key".to_string())).unwrap();
    let tokens = client.wallet_tokens("eth", WALLET).await.unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].symbol.as_deref(), Some("USDT"));
    assert_eq!(tokens[0].balance_formatted.as_deref(), Some("118.834442"));
    assert_eq!(tokens[0].usd_value, Some(118.905));
}

#[tokio::test]
async fn test_wallet_tokens_non_2xx_is_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/wallets/{WALLET}/tokens")))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let client = MoralisClient::new(server.uri(), None).unwrap();
    let err = client.wallet_tokens("eth", WALLET).await.unwrap_err();

    match err {
        AppError::UpstreamStatus { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "invalid api key");
        }
        other => panic!("expected UpstreamStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_api_key_sends_no_auth_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/wallets/{WALLET}/tokens")))
        .respond_with(ResponseTemplate::new(200).set_body_json(tokens_page()))
        .mount(&server)
        .await;

    let client = MoralisClient::new(server.uri(), None).unwrap();
    client.wallet_tokens("eth", WALLET).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("x-api-key"));
}

#[tokio::test]
async fn test_erc20_raw_relays_body_and_status() {
    let server = MockServer::start().await;
    let body = r#"[{"symbol":"USDT","balance":"118834442","decimals":6}]"#;
    Mock::given(method("GET"))
        .and(path(format!("/{WALLET}/erc20")))
        .and(query_param("chain", "bsc"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;

    let client = MoralisClient::new(server.uri(), Some("test-key".to_string())).unwrap();
    let raw = client.erc20_raw("bsc", WALLET).await.unwrap();

    assert!(raw.ok);
    assert_eq!(raw.status, 200);
    assert_eq!(raw.body, body);
}

#[tokio::test]
async fn test_erc20_raw_keeps_vendor_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/{WALLET}/erc20")))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such wallet"))
        .mount(&server)
        .await;

    let client = MoralisClient::new(server.uri(), None).unwrap();
    let raw = client.erc20_raw("eth", WALLET).await.unwrap();

    assert!(!raw.ok);
    assert_eq!(raw.status, 404);
    assert_eq!(raw.body, "no such wallet");
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Grab a free port, then close it so the connect is refused.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = MoralisClient::new(format!("http://127.0.0.1:{port}"), None).unwrap();
    let err = client.wallet_tokens("eth", WALLET).await.unwrap_err();
    assert!(matches!(err, AppError::Transport(_)));
}
