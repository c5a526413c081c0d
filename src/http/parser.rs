use std::collections::HashMap;

use crate::http::headers::{parse_cookie_header, parse_header_block};
use crate::http::request::{Method, Request};

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The blank-line separator or the declared body has not arrived yet.
    Incomplete,
    /// The header block is not valid UTF-8.
    InvalidUtf8,
}

/// Parses an HTTP/1.1 request from a byte buffer.
///
/// Returns the request and the number of bytes consumed, or
/// [`ParseError::Incomplete`] until the full header block and the
/// `Content-Length` worth of body bytes have arrived.
///
/// Parsing degrades instead of failing: a garbled request line falls back to
/// `GET /`, header lines without a colon are skipped, and an unparsable
/// `Content-Length` is treated as zero. A request therefore always carries a
/// method and a path; downstream policy treats the defaults as an
/// unauthenticated hit on the site root.
pub fn parse_http_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    // Look for the header/body separator
    let headers_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;
    let header_bytes = &buf[..headers_end];
    let body_bytes = &buf[headers_end + 4..];

    let headers_str = std::str::from_utf8(header_bytes).map_err(|_| ParseError::InvalidUtf8)?;

    let (request_line, header_block) = headers_str
        .split_once("\r\n")
        .unwrap_or((headers_str, ""));

    let (method, path) = parse_request_line(request_line);
    let headers = parse_header_block(header_block);

    let cookies: HashMap<String, String> = headers
        .get("Cookie")
        .map(parse_cookie_header)
        .unwrap_or_default();

    // Content-Length is trusted but tolerated when garbage
    let content_length = headers
        .get("Content-Length")
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    if body_bytes.len() < content_length {
        return Err(ParseError::Incomplete);
    }

    let body = body_bytes[..content_length].to_vec();

    let request = Request {
        method,
        path,
        version: "HTTP/1.1".to_string(),
        headers,
        cookies,
        body,
    };

    let total_consumed = headers_end + 4 + content_length;
    Ok((request, total_consumed))
}

/// Splits `METHOD SP PATH SP VERSION`, defaulting to `GET /` when the line
/// does not follow the shape.
fn parse_request_line(line: &str) -> (Method, String) {
    let mut parts = line.split_whitespace();

    let method = parts
        .next()
        .and_then(Method::from_str)
        .unwrap_or(Method::Get);

    let path = match parts.next() {
        Some(p) if p.starts_with('/') || p == "*" => p.to_string(),
        _ => "/".to_string(),
    };

    (method, path)
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let (parsed, consumed) = parse_http_request(req).unwrap();

        assert_eq!(parsed.path, "/");
        assert_eq!(parsed.headers.get("Host").unwrap(), "example.com");
        assert_eq!(consumed, req.len());
    }

    #[test]
    fn garbled_request_line_falls_back_to_defaults() {
        let req = b"NONSENSE\r\nHost: example.com\r\n\r\n";

        let (parsed, _) = parse_http_request(req).unwrap();

        assert_eq!(parsed.method, Method::Get);
        assert_eq!(parsed.path, "/");
    }
}
