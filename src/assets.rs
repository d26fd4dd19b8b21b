use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::Result;
use tokio::fs;

use crate::http::mime;
use crate::http::response::{Response, StatusCode};

/// Serves static files from a root directory.
///
/// A request path maps to a relative file name: `/` becomes `index.html`,
/// anything else drops its leading `/`. The resolved path is NOT checked
/// for containment under the root, so a path such as `../secret.html`
/// escapes it. Known gap; do not rely on the root as a security boundary.
pub struct StaticFiles {
    root: PathBuf,
}

impl StaticFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Maps a request path to the relative file name to serve.
    pub fn file_name(path: &str) -> &str {
        if path == "/" {
            "index.html"
        } else {
            path.strip_prefix('/').unwrap_or(path)
        }
    }

    /// Reads the named file and builds the response: 200 with the full
    /// contents and an extension-derived content type, or 404 naming the
    /// missing file.
    pub async fn serve(&self, path: &str) -> Result<Response> {
        let file_name = Self::file_name(path);
        let file_path = self.root.join(file_name);

        match fs::read(&file_path).await {
            Ok(contents) => {
                let content_type = mime::content_type_for(file_name);
                Ok(Response::new(StatusCode::Ok, content_type, contents))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Ok(Response::not_found(format!("{file_name} not found")))
            }
            Err(e) => Err(e.into()),
        }
    }
}
