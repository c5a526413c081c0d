//! Session-cookie authentication.
//!
//! Authentication is a pure function of the incoming cookie map; there is no
//! server-side session store. The `auth=true` cookie is the sole proof of a
//! valid session.

use std::collections::HashMap;

use serde::Deserialize;

use crate::http::response::Response;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "auth";

/// What to answer when an unauthenticated caller hits a protected path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthPolicy {
    /// Reply with the canned 401 page.
    Unauthorized,
    /// Reply with a 302 redirect to the login page.
    RedirectToLogin,
}

impl Default for AuthPolicy {
    fn default() -> Self {
        AuthPolicy::Unauthorized
    }
}

/// The single authentication predicate used by every gate.
pub fn is_authenticated(cookies: &HashMap<String, String>) -> bool {
    cookies
        .get(SESSION_COOKIE)
        .map(|v| v.trim() == "true")
        .unwrap_or(false)
}

/// Protected UI entry points that require a session before content is served.
pub fn is_protected(path: &str) -> bool {
    path == "/" || path == "/index.html"
}

/// The denial response for an unauthenticated hit on a protected path.
pub fn deny(policy: AuthPolicy, login_page: &str) -> Response {
    match policy {
        AuthPolicy::Unauthorized => Response::unauthorized(),
        AuthPolicy::RedirectToLogin => Response::redirect(login_page),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_value_is_trimmed() {
        let mut cookies = HashMap::new();
        cookies.insert("auth".to_string(), " true ".to_string());
        assert!(is_authenticated(&cookies));
    }

    #[test]
    fn any_other_value_is_rejected() {
        let mut cookies = HashMap::new();
        cookies.insert("auth".to_string(), "false".to_string());
        assert!(!is_authenticated(&cookies));
        assert!(!is_authenticated(&HashMap::new()));
    }
}
