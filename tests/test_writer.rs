use gatehouse::http::headers::{parse_cookie_header, parse_header_block};
use gatehouse::http::response::{ResponseBuilder, SetCookie, StatusCode};
use gatehouse::http::writer::serialize_response;

fn split_message(bytes: &[u8]) -> (String, String, Vec<u8>) {
    let text = String::from_utf8_lossy(bytes);
    let (head, body) = text.split_once("\r\n\r\n").expect("missing separator");
    let (status_line, header_block) = head.split_once("\r\n").unwrap_or((head, ""));
    (
        status_line.to_string(),
        header_block.to_string(),
        body.as_bytes().to_vec(),
    )
}

#[test]
fn test_status_line_format() {
    let response = ResponseBuilder::new(StatusCode::NotFound).build();
    let (status_line, _, _) = split_message(&serialize_response(&response));

    assert_eq!(status_line, "HTTP/1.1 404 Not Found");
}

#[test]
fn test_injects_date_and_connection_close() {
    let response = ResponseBuilder::new(StatusCode::Ok).build();
    let (_, header_block, _) = split_message(&serialize_response(&response));

    let headers = parse_header_block(&header_block);
    assert_eq!(headers.get("Connection"), Some("close"));
    assert!(headers.get("Date").unwrap().ends_with("GMT"));
}

#[test]
fn test_caller_connection_header_is_kept() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Connection", "close")
        .build();
    let bytes = serialize_response(&response);
    let text = String::from_utf8(bytes).unwrap();

    assert_eq!(text.matches("Connection:").count(), 1);
}

#[test]
fn test_one_set_cookie_line_per_entry() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .cookie(SetCookie::new("auth", "true"))
        .cookie(SetCookie::new("theme", "dark").max_age(60))
        .build();
    let text = String::from_utf8(serialize_response(&response)).unwrap();

    assert!(text.contains("Set-Cookie: auth=true; Path=/\r\n"));
    assert!(text.contains("Set-Cookie: theme=dark; Path=/; Max-Age=60\r\n"));
}

#[test]
fn test_body_follows_separator_untouched() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "application/octet-stream")
        .body(vec![0u8, 1, 2, 3])
        .build();
    let bytes = serialize_response(&response);

    assert!(bytes.ends_with(&[0, 1, 2, 3]));
}

/// Building a response and reparsing its wire bytes recovers the status,
/// headers and cookie assignments that were set.
#[test]
fn test_serialize_then_reparse_round_trip() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/html")
        .cookie(SetCookie::new("auth", "true"))
        .body(b"<h1>hi</h1>".to_vec())
        .build();

    let (status_line, header_block, body) = split_message(&serialize_response(&response));

    assert_eq!(status_line, "HTTP/1.1 200 OK");
    assert_eq!(body, b"<h1>hi</h1>");

    let headers = parse_header_block(&header_block);
    assert_eq!(headers.get("Content-Type"), Some("text/html"));
    assert_eq!(headers.get("Content-Length"), Some("11"));
    assert_eq!(headers.get("Connection"), Some("close"));

    let cookies = parse_cookie_header(headers.get("Set-Cookie").unwrap());
    assert_eq!(cookies.get("auth").map(String::as_str), Some("true"));
}
