//! Route table: exact `(method, path)` -> handler associations.
//!
//! The table is built once at startup and shared read-only across connection
//! tasks. Lookup yields a tagged [`RouteMatch`] so the connection handler
//! branches once between API dispatch and content serving.

use std::collections::HashMap;
use std::sync::Arc;

use crate::http::headers::HeaderMap;
use crate::http::request::Method;

/// What a route hook hands back to the connection layer.
pub enum HookOutput {
    /// A complete, already-framed HTTP message plus its status code for
    /// logging. Transmitted as-is.
    Framed(Vec<u8>, u16),
    /// A value to be wrapped as a 200 `application/json` response.
    Json(serde_json::Value),
    /// Plain text wrapped as a 200 `application/octet-stream` response.
    Text(String),
}

/// A registered route handler. Receives the request headers and raw body.
///
/// Errors are caught at the dispatch boundary and converted to a 500 JSON
/// response; they never reach the connection task as a fault.
pub type Handler = Arc<dyn Fn(&HeaderMap, &[u8]) -> anyhow::Result<HookOutput> + Send + Sync>;

/// Result of a route lookup.
pub enum RouteMatch {
    /// An API route with a bound handler.
    Hooked(Handler),
    /// No handler; the request is served as content.
    Unhooked,
}

/// Immutable `(method, path)` -> handler table.
#[derive(Default, Clone)]
pub struct RouteTable {
    routes: HashMap<(Method, String), Handler>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Registers a handler for an exact method and path.
    pub fn register<F>(&mut self, method: Method, path: impl Into<String>, handler: F)
    where
        F: Fn(&HeaderMap, &[u8]) -> anyhow::Result<HookOutput> + Send + Sync + 'static,
    {
        self.routes.insert((method, path.into()), Arc::new(handler));
    }

    /// Exact-match lookup; anything else is a content route.
    pub fn lookup(&self, method: Method, path: &str) -> RouteMatch {
        match self.routes.get(&(method, path.to_string())) {
            Some(handler) => RouteMatch::Hooked(Arc::clone(handler)),
            None => RouteMatch::Unhooked,
        }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
