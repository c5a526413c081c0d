use std::collections::HashMap;

use gatehouse::http::headers::HeaderMap;
use gatehouse::http::request::{Method, Request};

fn request_with(headers: HeaderMap, body: Vec<u8>) -> Request {
    Request {
        method: Method::Get,
        path: "/".to_string(),
        version: "HTTP/1.1".to_string(),
        headers,
        cookies: HashMap::new(),
        body,
    }
}

#[test]
fn test_request_header_retrieval() {
    let mut headers = HeaderMap::new();
    headers.insert("Host", "example.com");
    headers.insert("Content-Type", "application/json");

    let req = request_with(headers, vec![]);

    assert_eq!(req.header("Host"), Some("example.com"));
    assert_eq!(req.header("content-type"), Some("application/json"));
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_request_content_length_parsing() {
    let mut headers = HeaderMap::new();
    headers.insert("Content-Length", "42");

    let req = request_with(headers, vec![]);

    assert_eq!(req.content_length(), 42);
}

#[test]
fn test_request_content_length_missing() {
    let req = request_with(HeaderMap::new(), vec![]);

    assert_eq!(req.content_length(), 0);
}

#[test]
fn test_request_content_length_invalid() {
    let mut headers = HeaderMap::new();
    headers.insert("Content-Length", "not-a-number");

    let req = request_with(headers, vec![]);

    assert_eq!(req.content_length(), 0);
}

#[test]
fn test_request_cookie_lookup() {
    let mut req = request_with(HeaderMap::new(), vec![]);
    req.cookies.insert("auth".to_string(), "true".to_string());

    assert_eq!(req.cookie("auth"), Some("true"));
    assert_eq!(req.cookie("session"), None);
}

#[test]
fn test_form_fields_decoding() {
    let req = request_with(
        HeaderMap::new(),
        b"username=admin&password=p%40ss".to_vec(),
    );

    let fields = req.form_fields();
    assert_eq!(fields.get("username").map(String::as_str), Some("admin"));
    assert_eq!(fields.get("password").map(String::as_str), Some("p@ss"));
}

#[test]
fn test_form_fields_empty_body() {
    let req = request_with(HeaderMap::new(), vec![]);

    assert!(req.form_fields().is_empty());
}

#[test]
fn test_method_round_trip() {
    for s in ["GET", "POST", "PUT", "DELETE", "HEAD", "OPTIONS", "PATCH"] {
        assert_eq!(Method::from_str(s).unwrap().as_str(), s);
    }
    assert_eq!(Method::from_str("get"), None);
}
