//! Tests for the request pipeline

use super::Transport;
use crate::types::{ErrorKind, GatewayConfig, GatewayResponse, Method};
use crate::PaymeError;
use mockito::{Matcher, Server};
use serde_json::json;
use std::time::{Duration, Instant};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

fn test_config(api_url: &str) -> GatewayConfig {
    GatewayConfig::new("merchant-token", "secret-key", "order_id").with_api_url(api_url)
}

/// Grab a loopback port with no listener behind it
fn refused_addr() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

#[tokio::test]
async fn test_card_method_sends_merchant_token_header() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("x-auth", "merchant-token")
        .match_body(Matcher::PartialJson(json!({"method": "cards.create"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"result": {"card": {"token": "tok"}}}).to_string())
        .create_async()
        .await;

    let transport = Transport::new(&test_config(&server.url())).unwrap();
    let response = transport
        .send(
            Method::CardsCreate,
            json!({"card": {"number": "8600069195406311", "expire": "0399"}, "save": false}),
        )
        .await
        .unwrap();

    assert!(response.is_success());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_receipt_method_sends_combined_credential_header() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("x-auth", "merchant-token:secret-key")
        .match_body(Matcher::PartialJson(json!({"method": "receipts.cancel"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"result": {"receipt": {"state": 50}}}).to_string())
        .create_async()
        .await;

    let transport = Transport::new(&test_config(&server.url())).unwrap();
    let response = transport
        .send(Method::ReceiptsCancel, json!({"id": "r1"}))
        .await
        .unwrap();

    assert!(response.is_success());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_success_status_body_is_returned_without_retry() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(json!({"error": {"code": -32504, "message": "Access denied"}}).to_string())
        .expect(1)
        .create_async()
        .await;

    let transport = Transport::new(&test_config(&server.url())).unwrap();
    let response = transport
        .send(Method::ReceiptsCreate, json!({"amount": 100000.0}))
        .await
        .unwrap();

    let error = response.error().expect("expected a gateway error");
    assert_eq!(error.code, -32504);
    assert_eq!(error.kind(), ErrorKind::InsufficientPrivileges);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_undecodable_body_propagates_without_retry() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<html>gateway maintenance</html>")
        .expect(1)
        .create_async()
        .await;

    let transport = Transport::new(&test_config(&server.url())).unwrap();
    let result = transport.send(Method::CardsVerify, json!({"token": "t"})).await;

    assert!(matches!(result, Err(PaymeError::Http(_))));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_body_without_result_or_error_is_malformed() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"jsonrpc": "2.0"}).to_string())
        .create_async()
        .await;

    let transport = Transport::new(&test_config(&server.url())).unwrap();
    let result = transport
        .send(Method::CardsGetVerifyCode, json!({"token": "t"}))
        .await;

    assert!(matches!(result, Err(PaymeError::MalformedResponse)));
}

#[tokio::test]
async fn test_retry_exhaustion_performs_exactly_max_attempts() {
    let mut transport = Transport::new(&test_config(&refused_addr())).unwrap();
    transport.retry_delay = Duration::from_millis(10);

    let started = Instant::now();
    let result = transport
        .send(Method::ReceiptsPay, json!({"id": "r1", "token": "t"}))
        .await;

    match result {
        Err(PaymeError::RetriesExhausted { attempts, .. }) => assert_eq!(attempts, 10),
        other => panic!("expected RetriesExhausted, got {other:?}"),
    }
    // Nine backoff sleeps separate the ten attempts.
    assert!(started.elapsed() >= Duration::from_millis(90));
}

#[tokio::test]
async fn test_connection_failures_then_success_recovers() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let retry_delay = Duration::from_millis(50);

    // The port refuses connections for a few attempts, then a one-shot
    // server takes it over and answers the next request.
    let server = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(125)).await;
        let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
        let (mut stream, _) = listener.accept().await.unwrap();

        let mut data = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = stream.read(&mut buf).await.unwrap();
            data.extend_from_slice(&buf[..n]);
            if n == 0 || request_complete(&data) {
                break;
            }
        }

        let body = json!({"result": {"receipt": {"_id": "r1"}}}).to_string();
        let response = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.flush().await.unwrap();
    });

    let mut transport = Transport::new(&test_config(&format!("http://{addr}"))).unwrap();
    transport.retry_delay = retry_delay;

    let started = Instant::now();
    let response = transport
        .send(Method::ReceiptsCreate, json!({"amount": 100000.0}))
        .await
        .unwrap();

    assert_eq!(
        response,
        GatewayResponse::Success(json!({"receipt": {"_id": "r1"}}))
    );
    // At least two refused attempts happened before the server came up.
    assert!(started.elapsed() >= 2 * retry_delay);
    server.await.unwrap();
}

/// Whether `data` holds a full HTTP request (headers plus declared body)
fn request_complete(data: &[u8]) -> bool {
    let Some(end) = data
        .windows(4)
        .position(|window| window == b"\r\n\r\n")
        .map(|pos| pos + 4)
    else {
        return false;
    };
    let headers = String::from_utf8_lossy(&data[..end]).to_lowercase();
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    data.len() >= end + content_length
}
