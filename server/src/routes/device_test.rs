use axum::http::HeaderValue;

use super::*;

#[test]
fn device_label_without_header_is_unknown() {
    assert_eq!(device_label(&HeaderMap::new()), "Unknown");
}

#[test]
fn device_label_classifies_header() {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static("Mozilla/5.0 (X11; Linux x86_64; rv:89.0) Gecko/20100101 Firefox/89.0"),
    );
    assert_eq!(device_label(&headers), "Linux - Firefox");
}

#[test]
fn device_label_non_utf8_header_is_unknown() {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_bytes(b"\xff\xfe").unwrap());
    assert_eq!(device_label(&headers), "Unknown");
}

#[test]
fn client_info_serializes_device_field() {
    let info = ClientInfo {
        device: "macOS - Safari".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&info).unwrap(),
        serde_json::json!({ "device": "macOS - Safari" })
    );
}
