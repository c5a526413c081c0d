//! YAML-backed configuration with environment-variable override for the file
//! location. Every field has a default so the server runs without a file.

use serde::Deserialize;

use crate::auth::AuthPolicy;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "GATEHOUSE_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "gatehouse.yaml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address the listener binds to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Cap on concurrently handled connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,
    /// Cap on the bytes buffered for a single request.
    #[serde(default = "default_max_request_bytes")]
    pub max_request_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    /// Root for HTML pages.
    #[serde(default = "default_pages_root")]
    pub pages_root: String,
    /// Root for stylesheets, scripts, plain text and images.
    #[serde(default = "default_assets_root")]
    pub assets_root: String,
    /// Root for `application/*` payloads.
    #[serde(default = "default_apps_root")]
    pub apps_root: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_password")]
    pub password: String,
    /// Answer for unauthenticated hits on protected paths.
    #[serde(default)]
    pub policy: AuthPolicy,
    /// Redirect target when the policy is `redirect_to_login`.
    #[serde(default = "default_login_page")]
    pub login_page: String,
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_max_connections() -> usize {
    256
}

fn default_max_request_bytes() -> usize {
    64 * 1024
}

fn default_pages_root() -> String {
    "www".to_string()
}

fn default_assets_root() -> String {
    "static".to_string()
}

fn default_apps_root() -> String {
    "apps".to_string()
}

fn default_username() -> String {
    "admin".to_string()
}

fn default_password() -> String {
    "password".to_string()
}

fn default_login_page() -> String {
    "/login.html".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            max_connections: default_max_connections(),
            max_request_bytes: default_max_request_bytes(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            pages_root: default_pages_root(),
            assets_root: default_assets_root(),
            apps_root: default_apps_root(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            password: default_password(),
            policy: AuthPolicy::default(),
            login_page: default_login_page(),
        }
    }
}

impl Config {
    /// Loads configuration from the file named by `GATEHOUSE_CONFIG`
    /// (default `gatehouse.yaml`). A missing file yields the defaults; a
    /// present but invalid file is an error.
    pub fn load() -> anyhow::Result<Self> {
        let path =
            std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(serde_yaml::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Config::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml(contents: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }
}
