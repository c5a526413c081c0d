use std::collections::HashMap;

use crate::http::headers::HeaderMap;

/// HTTP request methods.
///
/// All common verbs are parsed; a request line carrying anything else falls
/// back to the `GET` default rather than failing the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Head,
    Options,
    Patch,
}

impl Method {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::Get),
            "POST" => Some(Method::Post),
            "PUT" => Some(Method::Put),
            "DELETE" => Some(Method::Delete),
            "HEAD" => Some(Method::Head),
            "OPTIONS" => Some(Method::Options),
            "PATCH" => Some(Method::Patch),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
            Method::Patch => "PATCH",
        }
    }
}

/// A parsed HTTP request.
///
/// Owned exclusively by one connection handling cycle. `method` and `path`
/// are always populated after parsing, even for malformed input (defaults
/// `GET` and `/`). Cookies are pre-extracted from the `Cookie` header.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, ...)
    pub method: Method,
    /// The request target, always starting with `/`
    pub path: String,
    /// HTTP version (typically "HTTP/1.1")
    pub version: String,
    /// Request headers, lookup case-insensitive
    pub headers: HeaderMap,
    /// Cookie name -> value pairs from the `Cookie` header
    pub cookies: HashMap<String, String>,
    /// Raw request body
    pub body: Vec<u8>,
}

impl Request {
    /// Retrieves a header value by name, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Retrieves a cookie value by name.
    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    /// The declared `Content-Length`, or 0 when missing or unparsable.
    pub fn content_length(&self) -> usize {
        self.header("Content-Length")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    /// Decodes the body as `application/x-www-form-urlencoded` fields.
    pub fn form_fields(&self) -> HashMap<String, String> {
        url::form_urlencoded::parse(&self.body)
            .into_owned()
            .collect()
    }
}
