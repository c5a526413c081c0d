//! Gatehouse - a cookie-gated HTTP/1.1 content server.
//!
//! Core library for request parsing, session authentication,
//! route dispatch and static content resolution.

pub mod auth;
pub mod config;
pub mod content;
pub mod http;
pub mod router;
pub mod server;
