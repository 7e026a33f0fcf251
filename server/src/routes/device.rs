//! Caller device reporting.

#[cfg(test)]
#[path = "device_test.rs"]
mod device_test;

use axum::http::HeaderMap;
use axum::http::header::USER_AGENT;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::user_agent::classify;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    pub device: String,
}

/// Device label for the request's `User-Agent` header.
///
/// Non-UTF-8 header values count as missing.
pub fn device_label(headers: &HeaderMap) -> String {
    classify(headers.get(USER_AGENT).and_then(|v| v.to_str().ok()))
}

/// `GET /api/client`: report how the server labels the caller's device.
pub async fn client_info(headers: HeaderMap) -> Json<ClientInfo> {
    Json(ClientInfo {
        device: device_label(&headers),
    })
}
