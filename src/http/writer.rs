use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Serializes a [`Response`] into wire bytes.
///
/// Emits the status line, all header entries, one `Set-Cookie` line per queued
/// cookie, then the blank-line separator and the body. `Date`,
/// `Connection: close` and `Content-Length` are injected when the caller did
/// not set them; every connection is single-shot, so `Connection: close` is
/// the only value ever emitted.
pub fn serialize_response(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Headers
    for (name, value) in resp.headers.iter() {
        buf.extend_from_slice(name.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(value.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    if !resp.headers.contains("Date") {
        let date = chrono::Utc::now().format("%a, %d %b %Y %H:%M:%S GMT");
        buf.extend_from_slice(format!("Date: {}\r\n", date).as_bytes());
    }
    if !resp.headers.contains("Connection") {
        buf.extend_from_slice(b"Connection: close\r\n");
    }
    if !resp.headers.contains("Content-Length") {
        buf.extend_from_slice(format!("Content-Length: {}\r\n", resp.body.len()).as_bytes());
    }

    // One Set-Cookie line per entry
    for cookie in &resp.cookies {
        buf.extend_from_slice(b"Set-Cookie: ");
        buf.extend_from_slice(cookie.header_value().as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    // Body
    buf.extend_from_slice(&resp.body);

    buf
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    /// Wraps bytes that are already a complete HTTP message, as returned by a
    /// route hook's framed output. Written verbatim.
    pub fn raw(buffer: Vec<u8>) -> Self {
        Self { buffer, written: 0 }
    }

    pub async fn write_to_stream(&mut self, stream: &mut TcpStream) -> anyhow::Result<()> {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        Ok(())
    }
}
