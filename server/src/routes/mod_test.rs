use reqwest::header::USER_AGENT;

use super::*;
use crate::routes::device::ClientInfo;

/// Serve `app(config)` on an ephemeral port and return its base URL.
async fn spawn_app(config: ServerConfig) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app(&config)).await.unwrap();
    });
    format!("http://{addr}")
}

async fn get_client_info(user_agent: Option<&str>) -> ClientInfo {
    let base = spawn_app(ServerConfig::default()).await;
    let mut request = reqwest::Client::new().get(format!("{base}/api/client"));
    if let Some(ua) = user_agent {
        request = request.header(USER_AGENT, ua);
    }
    let response = request.send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    response.json().await.unwrap()
}

#[tokio::test]
async fn healthz_returns_ok() {
    let base = spawn_app(ServerConfig::default()).await;
    let response = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn client_info_reports_device_label() {
    let info = get_client_info(Some(
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0 Safari/537.36 Edg/91.0",
    ))
    .await;
    assert_eq!(info.device, "Windows 10 - Edge");
}

#[tokio::test]
async fn client_info_without_user_agent_is_unknown() {
    let info = get_client_info(None).await;
    assert_eq!(info.device, "Unknown");
}

#[tokio::test]
async fn cors_layer_answers_preflight_when_enabled() {
    let base = spawn_app(ServerConfig {
        cors_allow_any: true,
        ..ServerConfig::default()
    })
    .await;
    let response = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{base}/api/client"))
        .header("origin", "https://example.com")
        .header("access-control-request-method", "GET")
        .send()
        .await
        .unwrap();
    let allow_origin = response.headers().get("access-control-allow-origin").unwrap();
    assert_eq!(allow_origin.to_str().unwrap(), "*");
}

#[tokio::test]
async fn cors_headers_absent_by_default() {
    let base = spawn_app(ServerConfig::default()).await;
    let response = reqwest::Client::new()
        .get(format!("{base}/api/client"))
        .header("origin", "https://example.com")
        .send()
        .await
        .unwrap();
    assert!(response.headers().get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let base = spawn_app(ServerConfig::default()).await;
    let response = reqwest::get(format!("{base}/api/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
