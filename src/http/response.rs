use bytes::Bytes;

use crate::http::headers::HeaderMap;

/// HTTP status codes emitted by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 302 Found
    Found,
    /// 400 Bad Request
    BadRequest,
    /// 401 Unauthorized
    Unauthorized,
    /// 404 Not Found
    NotFound,
    /// 413 Payload Too Large
    PayloadTooLarge,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Found => 302,
            StatusCode::BadRequest => 400,
            StatusCode::Unauthorized => 401,
            StatusCode::NotFound => 404,
            StatusCode::PayloadTooLarge => 413,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Found => "Found",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Unauthorized => "Unauthorized",
            StatusCode::NotFound => "Not Found",
            StatusCode::PayloadTooLarge => "Payload Too Large",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// One pending `Set-Cookie` header.
///
/// Rendered as `name=value; Path=<path>[; Max-Age=<n>]`, one line per cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetCookie {
    pub name: String,
    pub value: String,
    pub path: String,
    pub max_age: Option<i64>,
}

impl SetCookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            path: "/".to_string(),
            max_age: None,
        }
    }

    pub fn max_age(mut self, seconds: i64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    /// The header value fragment after `Set-Cookie: `.
    pub fn header_value(&self) -> String {
        match self.max_age {
            Some(age) => format!("{}={}; Path={}; Max-Age={}", self.name, self.value, self.path, age),
            None => format!("{}={}; Path={}", self.name, self.value, self.path),
        }
    }
}

/// A complete HTTP response ready to be serialized.
///
/// Owned and mutated only by the connection cycle that builds it.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Response headers, lookup case-insensitive
    pub headers: HeaderMap,
    /// Cookies to emit, one `Set-Cookie` line each
    pub cookies: Vec<SetCookie>,
    /// Response body
    pub body: Bytes,
}

/// Builder for constructing HTTP responses in a fluent style.
pub struct ResponseBuilder {
    status: StatusCode,
    headers: HeaderMap,
    cookies: Vec<SetCookie>,
    body: Bytes,
}

impl ResponseBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            cookies: Vec::new(),
            body: Bytes::new(),
        }
    }

    /// Adds or replaces a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Queues a cookie for emission.
    pub fn cookie(mut self, cookie: SetCookie) -> Self {
        self.cookies.push(cookie);
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Builds the final Response.
    ///
    /// Adds `Content-Length` from the body size if the caller did not set it.
    pub fn build(mut self) -> Response {
        if !self.headers.contains("Content-Length") {
            self.headers
                .insert("Content-Length", self.body.len().to_string());
        }

        Response {
            status: self.status,
            headers: self.headers,
            cookies: self.cookies,
            body: self.body,
        }
    }
}

impl Response {
    /// Creates a 200 OK response with the given body and content type.
    pub fn ok(body: impl Into<Bytes>, content_type: &str) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", content_type)
            .body(body)
            .build()
    }

    /// Canned 404 response, independent of any request state.
    pub fn not_found() -> Self {
        ResponseBuilder::new(StatusCode::NotFound)
            .header("Content-Type", "text/html")
            .body(Bytes::from_static(b"<h1>404 Not Found</h1>"))
            .build()
    }

    /// Canned 401 response, independent of any request state.
    pub fn unauthorized() -> Self {
        ResponseBuilder::new(StatusCode::Unauthorized)
            .header("Content-Type", "text/html")
            .body(Bytes::from_static(
                b"<h1>401 Unauthorized</h1><p>Access denied. Please log in.</p>",
            ))
            .build()
    }

    /// Canned 400 response, used when the header block is not decodable.
    pub fn bad_request() -> Self {
        ResponseBuilder::new(StatusCode::BadRequest)
            .header("Content-Type", "text/html")
            .body(Bytes::from_static(b"<h1>400 Bad Request</h1>"))
            .build()
    }

    /// Canned 413 response, used when a request exceeds the receive cap.
    pub fn payload_too_large() -> Self {
        ResponseBuilder::new(StatusCode::PayloadTooLarge)
            .header("Content-Type", "text/html")
            .body(Bytes::from_static(b"<h1>413 Payload Too Large</h1>"))
            .build()
    }

    /// 302 redirect to `location`.
    pub fn redirect(location: &str) -> Self {
        ResponseBuilder::new(StatusCode::Found)
            .header("Location", location)
            .build()
    }

    /// 500 response with a JSON error body; used when a route hook fails.
    pub fn internal_error(message: &str) -> Self {
        let body = serde_json::json!({ "error": message }).to_string();
        ResponseBuilder::new(StatusCode::InternalServerError)
            .header("Content-Type", "application/json")
            .body(body.into_bytes())
            .build()
    }

    /// Wraps a hook's JSON value as a 200 `application/json` response.
    pub fn json(value: &serde_json::Value) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", "application/json")
            .body(value.to_string().into_bytes())
            .build()
    }

    /// Wraps a hook's plain text output as a 200 octet-stream response.
    pub fn octet_stream(text: String) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", "application/octet-stream")
            .body(text.into_bytes())
            .build()
    }
}
