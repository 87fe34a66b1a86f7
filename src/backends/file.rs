// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::errors::TransportError;
use crate::remote::{Method, RemoteRequest};
use crate::traits::Transport;

/// Serves GET requests from JSON files on disk.
///
/// A request for `<service_url>users/7?x=1` reads `<root>/users/7.json`; the
/// query string is ignored. Useful for demos and for replaying captured
/// responses.
pub struct FileTransport {
    root: PathBuf,
    service_url: String,
}

impl FileTransport {
    pub fn new(root: impl Into<PathBuf>, service_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            service_url: service_url.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, url: &str) -> Option<PathBuf> {
        let relative = url.strip_prefix(self.service_url.as_str())?;
        let relative = relative.split('?').next().unwrap_or_default();
        let relative = relative.trim_matches('/');

        if relative.is_empty() || relative.split('/').any(|segment| segment == "..") {
            return None;
        }

        Some(self.root.join(format!("{}.json", relative)))
    }
}

#[async_trait]
impl Transport for FileTransport {
    async fn send(&self, request: RemoteRequest) -> Result<Value, TransportError> {
        if request.method != Method::Get {
            return Err(TransportError::Rejected {
                url: request.url,
                reason: format!("{} is not supported by the file transport", request.method),
            });
        }

        let path = self.resolve(&request.url).ok_or_else(|| TransportError::NotFound {
            url: request.url.clone(),
        })?;

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(TransportError::NotFound { url: request.url })
            }
            Err(e) => return Err(TransportError::Io(e)),
        };

        serde_json::from_str(&content).map_err(|source| TransportError::InvalidBody {
            url: request.url,
            source,
        })
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SERVICE_URL: &str = "http://localhost:8080/rs/";

    #[tokio::test]
    async fn test_reads_json_for_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("users")).unwrap();
        std::fs::write(dir.path().join("users/7.json"), r#"{"id": 7}"#).unwrap();

        let transport = FileTransport::new(dir.path(), SERVICE_URL);
        assert_eq!(transport.root(), dir.path());

        let body = transport
            .send(RemoteRequest::new(Method::Get, format!("{}users/7?verbose=true", SERVICE_URL)))
            .await
            .unwrap();

        assert_eq!(body, json!({ "id": 7 }));
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let transport = FileTransport::new(dir.path(), SERVICE_URL);

        let err = transport
            .send(RemoteRequest::new(Method::Get, format!("{}nothing", SERVICE_URL)))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::NotFound { .. }));

        let err = transport
            .send(RemoteRequest::new(Method::Get, format!("{}../etc/passwd", SERVICE_URL)))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_rejects_non_get_and_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
        let transport = FileTransport::new(dir.path(), SERVICE_URL);

        let err = transport
            .send(RemoteRequest::new(Method::Post, format!("{}broken", SERVICE_URL)))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Rejected { .. }));

        let err = transport
            .send(RemoteRequest::new(Method::Get, format!("{}broken", SERVICE_URL)))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::InvalidBody { .. }));
    }
}
