//! Tests for the HTTP module

use super::handler::parse_content_type;
use super::*;
use crate::params::OrderedParams;
use bytes::Bytes;
use pretty_assertions::assert_eq;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;

// ============================================================================
// Status Classification Tests
// ============================================================================

#[test]
fn test_2xx_is_not_error() {
    assert!(!is_error_status(StatusCode::OK));
    assert!(!is_error_status(StatusCode::CREATED));
    assert!(!is_error_status(StatusCode::NO_CONTENT));
}

#[test]
fn test_4xx_and_5xx_are_errors() {
    assert!(is_error_status(StatusCode::BAD_REQUEST));
    assert!(is_error_status(StatusCode::NOT_FOUND));
    assert!(is_error_status(StatusCode::INTERNAL_SERVER_ERROR));
    assert!(is_error_status(StatusCode::BAD_GATEWAY));
}

#[test]
fn test_redirects_are_not_errors() {
    assert!(!is_error_status(StatusCode::MOVED_PERMANENTLY));
    assert!(!is_error_status(StatusCode::FOUND));
}

// ============================================================================
// URL Builder Tests
// ============================================================================

#[test]
fn test_build_url_without_params() {
    let url = build_request_url(
        "https://api.example.com",
        "/channels/{channelId}/subscribers",
        &OrderedParams::new(),
    );
    assert_eq!(url, "https://api.example.com/channels/{channelId}/subscribers");
}

#[test]
fn test_build_url_leaves_placeholders_unexpanded() {
    let params: OrderedParams = [("pageSize", "50")].into_iter().collect();
    let url = build_request_url(
        "https://api.example.com",
        "/channels/{channelId}/subscribers",
        &params,
    );
    assert_eq!(
        url,
        "https://api.example.com/channels/{channelId}/subscribers?pageSize=50"
    );
}

#[test]
fn test_build_url_preserves_param_order_and_duplicates() {
    let params: OrderedParams = [("cursor", "1234"), ("pageSize", "50"), ("id", "1"), ("id", "2")]
        .into_iter()
        .collect();
    let url = build_request_url("https://api.example.com", "/channels", &params);
    assert_eq!(
        url,
        "https://api.example.com/channels?cursor=1234&pageSize=50&id=1&id=2"
    );
}

#[test]
fn test_build_url_performs_no_percent_encoding() {
    let params: OrderedParams = [("since", "2014-04-30T21:32:21Z")].into_iter().collect();
    let url = build_request_url("https://api.example.com/", "viewings", &params);
    assert_eq!(
        url,
        "https://api.example.com/viewings?since=2014-04-30T21:32:21Z"
    );
}

#[test]
fn test_expand_path_substitutes_variables() {
    let expanded = expand_path(
        "https://api.example.com/channels/{channelId}/webcasts/{webcastId}/registrations",
        &[("channelId", "7"), ("webcastId", "42")],
    );
    assert_eq!(
        expanded,
        "https://api.example.com/channels/7/webcasts/42/registrations"
    );
}

#[test]
fn test_expand_path_leaves_unknown_placeholders() {
    let expanded = expand_path("/channels/{channelId}", &[("webcastId", "42")]);
    assert_eq!(expanded, "/channels/{channelId}");
}

// ============================================================================
// Content-Type Parsing Tests
// ============================================================================

fn headers_with_content_type(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_str(value).unwrap());
    headers
}

#[test]
fn test_parse_content_type_with_charset() {
    let headers = headers_with_content_type("application/xml; charset=UTF-8");
    let (media_type, charset) = parse_content_type(&headers);
    assert_eq!(media_type.as_deref(), Some("application/xml"));
    assert_eq!(charset, "UTF-8");
}

#[test]
fn test_parse_content_type_defaults_charset() {
    let headers = headers_with_content_type("application/xml");
    let (media_type, charset) = parse_content_type(&headers);
    assert_eq!(media_type.as_deref(), Some("application/xml"));
    assert_eq!(charset, DEFAULT_CHARSET);
}

#[test]
fn test_parse_content_type_lowercases_media_type() {
    let headers = headers_with_content_type("Application/XML");
    let (media_type, _) = parse_content_type(&headers);
    assert_eq!(media_type.as_deref(), Some("application/xml"));
}

#[test]
fn test_parse_content_type_missing_header() {
    let (media_type, charset) = parse_content_type(&HeaderMap::new());
    assert!(media_type.is_none());
    assert_eq!(charset, DEFAULT_CHARSET);
}

// ============================================================================
// Error Handler Tests
// ============================================================================

const XML_ERROR: &str = "<error><code>NotFound</code><message>No such channel</message></error>";

#[test]
fn test_envelope_with_xml_api_error() {
    let handler = ErrorHandler::new();
    let headers = headers_with_content_type("application/xml");
    let body = Bytes::from_static(XML_ERROR.as_bytes());

    let envelope = handler.envelope_from_parts(StatusCode::NOT_FOUND, headers, body.clone());

    assert_eq!(envelope.status_code, 404);
    assert_eq!(envelope.status_text, "Not Found");
    assert_eq!(envelope.charset, DEFAULT_CHARSET);
    assert_eq!(envelope.raw_body, body);
    let api_error = envelope.api_error.unwrap();
    assert_eq!(api_error.code, "NotFound");
    assert_eq!(api_error.message, "No such channel");
}

#[test]
fn test_envelope_with_html_proxy_page() {
    let handler = ErrorHandler::new();
    let headers = headers_with_content_type("text/html; charset=utf-8");
    let body = Bytes::from_static(b"<html><body>502 Bad Gateway</body></html>");

    let envelope = handler.envelope_from_parts(StatusCode::BAD_GATEWAY, headers, body.clone());

    assert_eq!(envelope.status_code, 502);
    assert!(envelope.api_error.is_none());
    assert_eq!(envelope.raw_body, body);
    assert_eq!(envelope.charset, "utf-8");
    assert!(envelope.headers.contains_key(CONTENT_TYPE));
}

#[test]
fn test_envelope_with_empty_body() {
    let handler = ErrorHandler::new();
    let envelope = handler.envelope_from_parts(
        StatusCode::INTERNAL_SERVER_ERROR,
        HeaderMap::new(),
        Bytes::new(),
    );

    assert_eq!(envelope.status_code, 500);
    assert!(envelope.api_error.is_none());
    assert_eq!(envelope.raw_body.len(), 0);
    assert_eq!(envelope.charset, DEFAULT_CHARSET);
}

#[test]
fn test_envelope_with_wrong_shaped_xml() {
    // Well-formed XML that is not the error entity: non-fatal, no api_error.
    let handler = ErrorHandler::new();
    let headers = headers_with_content_type("application/xml");
    let body = Bytes::from_static(b"<channels><channel><id>1</id></channel></channels>");

    let envelope = handler.envelope_from_parts(StatusCode::BAD_REQUEST, headers, body.clone());

    assert!(envelope.api_error.is_none());
    assert_eq!(envelope.raw_body, body);
}

#[test]
fn test_extract_without_media_type() {
    let handler = ErrorHandler::new();
    assert!(handler.extract(None, XML_ERROR.as_bytes()).is_none());
}

#[test]
fn test_extract_json_api_error() {
    let handler = ErrorHandler::new();
    let api_error = handler
        .extract(
            Some("application/json"),
            br#"{"code":"Forbidden","message":"Not your channel"}"#,
        )
        .unwrap();
    assert_eq!(api_error.code, "Forbidden");
}

#[test]
fn test_envelope_display() {
    let handler = ErrorHandler::new();
    let headers = headers_with_content_type("application/xml");
    let envelope = handler.envelope_from_parts(
        StatusCode::NOT_FOUND,
        headers,
        Bytes::from_static(XML_ERROR.as_bytes()),
    );
    let rendered = envelope.to_string();
    assert!(rendered.contains("HTTP 404"));
    assert!(rendered.contains("NotFound"));

    let empty = handler.envelope_from_parts(
        StatusCode::INTERNAL_SERVER_ERROR,
        HeaderMap::new(),
        Bytes::new(),
    );
    assert!(empty.to_string().contains("0 byte body"));
}
