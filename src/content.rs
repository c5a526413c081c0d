//! Content resolution: request path -> MIME type -> storage root -> bytes.
//!
//! Each MIME primary type maps to its own storage root: HTML pages live under
//! the pages root, plain text, stylesheets, scripts and images under the asset
//! root, and `application/*` payloads under the app root. Anything else is an
//! unsupported type, which the connection layer answers with a 404.

use std::path::{Component, Path, PathBuf};

use bytes::Bytes;

#[derive(Debug)]
pub enum ContentError {
    /// MIME primary type has no storage root.
    Unsupported(String),
    /// The resolved file does not exist.
    NotFound(PathBuf),
    /// The path tries to escape the storage root.
    InvalidPath(String),
    /// Any other filesystem failure.
    Io(std::io::Error),
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::Unsupported(mime) => write!(f, "unsupported content type: {}", mime),
            ContentError::NotFound(path) => write!(f, "file not found: {}", path.display()),
            ContentError::InvalidPath(path) => write!(f, "invalid path: {}", path),
            ContentError::Io(e) => write!(f, "io error: {}", e),
        }
    }
}

impl std::error::Error for ContentError {}

/// A successfully loaded piece of content.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub mime: &'static str,
    pub bytes: Bytes,
}

/// The three storage roots content is served from.
#[derive(Debug, Clone)]
pub struct ContentRoots {
    pages: PathBuf,
    assets: PathBuf,
    apps: PathBuf,
}

impl ContentRoots {
    pub fn new(
        pages: impl Into<PathBuf>,
        assets: impl Into<PathBuf>,
        apps: impl Into<PathBuf>,
    ) -> Self {
        Self {
            pages: pages.into(),
            assets: assets.into(),
            apps: apps.into(),
        }
    }

    /// Picks the storage root for a MIME type, by primary type.
    fn root_for(&self, mime: &str) -> Result<&Path, ContentError> {
        let (primary, sub) = mime.split_once('/').unwrap_or((mime, ""));
        match primary {
            "text" if sub == "html" => Ok(&self.pages),
            "text" | "image" => Ok(&self.assets),
            "application" => Ok(&self.apps),
            _ => Err(ContentError::Unsupported(mime.to_string())),
        }
    }

    /// Resolves a request path to its MIME type and file contents.
    ///
    /// The literal `static/` prefix is stripped before joining against the
    /// chosen root, so `/static/style.css` and `/style.css` land on the same
    /// file. Paths with `..` segments are rejected.
    pub async fn resolve(&self, path: &str) -> Result<Resolved, ContentError> {
        let mime = mime_type(path);
        let root = self.root_for(mime)?;

        let relative = path.trim_start_matches('/');
        let relative = relative.strip_prefix("static/").unwrap_or(relative);

        if Path::new(relative)
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(ContentError::InvalidPath(path.to_string()));
        }

        let filepath = root.join(relative);
        tracing::debug!(file = %filepath.display(), mime, "serving object");

        let bytes = match tokio::fs::read(&filepath).await {
            Ok(bytes) => Bytes::from(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ContentError::NotFound(filepath));
            }
            Err(e) => return Err(ContentError::Io(e)),
        };

        Ok(Resolved { mime, bytes })
    }
}

/// MIME type from the path's file extension.
///
/// Unknown extensions default to `application/octet-stream` and are served
/// from the app root.
pub fn mime_type(path: &str) -> &'static str {
    let extension = path.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");
    match extension {
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "txt" => "text/plain",
        "js" => "text/javascript",
        "csv" => "text/csv",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "wasm" => "application/wasm",
        "mp4" => "video/mp4",
        "mp3" => "audio/mpeg",
        _ => "application/octet-stream",
    }
}
