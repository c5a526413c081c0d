//! HTTP protocol implementation.
//!
//! A hand-built HTTP/1.1 request-response engine: byte-level message framing,
//! header and cookie parsing, and status-line/response construction. Every
//! connection is single-shot; there is no keep-alive, chunked transfer or
//! pipelining.
//!
//! # Architecture
//!
//! - **`connection`**: the per-connection state machine - receive, parse,
//!   authenticate, dispatch, build, send, close
//! - **`parser`**: parses incoming requests from byte buffers
//! - **`headers`**: case-insensitive header map and cookie extraction
//! - **`request`**: HTTP request representation
//! - **`response`**: HTTP response representation with builder pattern and
//!   canned error bodies
//! - **`writer`**: serializes and writes responses to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Accumulate until a full message parses
//!        └──────┬──────┘
//!               │ Request received
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Auth gate, route hook or content serving
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼ Closed (always; connections are single-shot)
//! ```

pub mod connection;
pub mod headers;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
