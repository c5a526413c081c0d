use std::sync::Arc;

use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::auth;
use crate::config::Config;
use crate::content::ContentRoots;
use crate::http::parser::{ParseError, parse_http_request};
use crate::http::request::{Method, Request};
use crate::http::response::{Response, SetCookie};
use crate::http::writer::ResponseWriter;
use crate::router::{HookOutput, RouteMatch, RouteTable};

/// Owns the full lifecycle of one accepted connection:
/// receive, parse, authenticate, dispatch, build, send, close.
pub struct Connection {
    stream: TcpStream,
    buffer: Vec<u8>,
    state: ConnectionState,
    routes: Arc<RouteTable>,
    config: Arc<Config>,
    roots: ContentRoots,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

/// What one receive pass produced.
enum ReadOutcome {
    Request(Request),
    /// Peer went away before a full message arrived; nothing to answer.
    Disconnected,
    /// Buffered bytes exceeded the configured cap.
    TooLarge,
    /// Header block could not be decoded.
    Malformed,
}

impl Connection {
    pub fn new(stream: TcpStream, routes: Arc<RouteTable>, config: Arc<Config>) -> Self {
        let roots = ContentRoots::new(
            &config.content.pages_root,
            &config.content.assets_root,
            &config.content.apps_root,
        );
        Self {
            stream,
            buffer: Vec::with_capacity(4096),
            state: ConnectionState::Reading,
            routes,
            config,
            roots,
        }
    }

    /// Drives the connection through its states. Every connection is
    /// single-shot: one request, one response, close.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await? {
                        ReadOutcome::Request(req) => ConnectionState::Processing(req),
                        ReadOutcome::Disconnected => ConnectionState::Closed,
                        ReadOutcome::TooLarge => ConnectionState::Writing(ResponseWriter::new(
                            &Response::payload_too_large(),
                        )),
                        ReadOutcome::Malformed => {
                            ConnectionState::Writing(ResponseWriter::new(&Response::bad_request()))
                        }
                    };
                }

                ConnectionState::Processing(req) => {
                    let writer = self.process(req).await;
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(mut writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Accumulates from the socket until a full message parses, the peer
    /// disconnects, or the receive cap is hit.
    async fn read_request(&mut self) -> anyhow::Result<ReadOutcome> {
        loop {
            // Try parsing whatever we already have
            match parse_http_request(&self.buffer) {
                Ok((request, consumed)) => {
                    self.buffer.drain(..consumed);
                    return Ok(ReadOutcome::Request(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data -> fall through to read
                }

                Err(ParseError::InvalidUtf8) => {
                    return Ok(ReadOutcome::Malformed);
                }
            }

            if self.buffer.len() > self.config.server.max_request_bytes {
                tracing::warn!(
                    buffered = self.buffer.len(),
                    cap = self.config.server.max_request_bytes,
                    "request exceeds receive cap"
                );
                return Ok(ReadOutcome::TooLarge);
            }

            let mut temp = [0u8; 1024];
            let n = match self.stream.read(&mut temp).await {
                Ok(n) => n,
                Err(e) if e.kind() == std::io::ErrorKind::ConnectionReset => {
                    tracing::warn!("connection reset by peer");
                    return Ok(ReadOutcome::Disconnected);
                }
                Err(e) => return Err(e.into()),
            };

            if n == 0 {
                if !self.buffer.is_empty() {
                    // Partial message, then EOF
                    return Ok(ReadOutcome::Malformed);
                }
                return Ok(ReadOutcome::Disconnected);
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }
    }

    /// Dispatches a parsed request to either its route hook or content
    /// serving, and produces the writer for the reply.
    async fn process(&self, mut req: Request) -> ResponseWriter {
        match self.routes.lookup(req.method, &req.path) {
            RouteMatch::Hooked(handler) => {
                // Protected paths are gated before the hook runs
                if auth::is_protected(&req.path) && !auth::is_authenticated(&req.cookies) {
                    tracing::info!(path = %req.path, "access denied, no session cookie");
                    return ResponseWriter::new(&self.deny());
                }

                tracing::debug!(method = req.method.as_str(), path = %req.path, "invoking hook");
                match handler(&req.headers, &req.body) {
                    Ok(HookOutput::Framed(bytes, status)) => {
                        tracing::info!(path = %req.path, status, "hook produced framed reply");
                        ResponseWriter::raw(bytes)
                    }
                    Ok(HookOutput::Json(value)) => ResponseWriter::new(&Response::json(&value)),
                    Ok(HookOutput::Text(text)) => {
                        ResponseWriter::new(&Response::octet_stream(text))
                    }
                    Err(e) => {
                        tracing::error!(path = %req.path, error = %e, "hook failed");
                        ResponseWriter::new(&Response::internal_error(&e.to_string()))
                    }
                }
            }

            RouteMatch::Unhooked => {
                let response = if req.method == Method::Post && req.path == "/login" {
                    self.handle_login(&req).await
                } else if req.method == Method::Get && auth::is_protected(&req.path) {
                    if auth::is_authenticated(&req.cookies) {
                        if req.path == "/" {
                            req.path = "/index.html".to_string();
                        }
                        self.serve_content(&req.path).await
                    } else {
                        tracing::info!(path = %req.path, "access denied, no session cookie");
                        self.deny()
                    }
                } else {
                    // Static assets are not access-controlled
                    self.serve_content(&req.path).await
                };
                ResponseWriter::new(&response)
            }
        }
    }

    /// `POST /login`: compare the form fields against the configured
    /// credential pair. Success sets the session cookie and serves the index
    /// page; failure is the canned 401.
    async fn handle_login(&self, req: &Request) -> Response {
        let fields = req.form_fields();
        let username = fields.get("username").map(String::as_str);
        let password = fields.get("password").map(String::as_str);

        let auth_cfg = &self.config.auth;
        if username == Some(auth_cfg.username.as_str())
            && password == Some(auth_cfg.password.as_str())
        {
            tracing::info!(user = %auth_cfg.username, "login succeeded");
            let mut response = self.serve_content("/index.html").await;
            response
                .cookies
                .push(SetCookie::new(auth::SESSION_COOKIE, "true"));
            response
        } else {
            tracing::info!("login failed, bad credentials");
            Response::unauthorized()
        }
    }

    /// Resolves and serves a file; every resolver failure becomes a 404.
    async fn serve_content(&self, path: &str) -> Response {
        match self.roots.resolve(path).await {
            Ok(resolved) => Response::ok(resolved.bytes, resolved.mime),
            Err(e) => {
                tracing::warn!(path, error = %e, "content not served");
                Response::not_found()
            }
        }
    }

    fn deny(&self) -> Response {
        auth::deny(self.config.auth.policy, &self.config.auth.login_page)
    }
}
