use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};
use tokio::fs;
use tracing::{error, instrument};

use crate::domain::common::entities::app_errors::CoreError;

/// One JSON document per file under a data directory. Writes go through a
/// sibling temp file and a rename so a crash never leaves half a document.
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `Ok(None)` when the file does not exist.
    #[instrument(skip(self))]
    pub async fn read<T: DeserializeOwned>(&self, relative: &str) -> Result<Option<T>, CoreError> {
        let path = self.root.join(relative);

        let raw = match fs::read(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed to read store file");
                return Err(CoreError::Storage(format!(
                    "failed to read {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        serde_json::from_slice(&raw).map(Some).map_err(|e| {
            error!(path = %path.display(), error = %e, "Store file is not valid JSON");
            CoreError::Storage(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    #[instrument(skip(self, value))]
    pub async fn write<T: Serialize + Sync>(&self, relative: &str, value: &T) -> Result<(), CoreError> {
        let path = self.root.join(relative);
        let io_error = |action: &str, e: std::io::Error| {
            error!(path = %path.display(), error = %e, "Failed to {} store file", action);
            CoreError::Storage(format!("failed to {} {}: {}", action, path.display(), e))
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| io_error("create directory for", e))?;
        }

        let raw = serde_json::to_vec_pretty(value)
            .map_err(|e| CoreError::Storage(format!("failed to serialize {}: {}", relative, e)))?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, raw).await.map_err(|e| io_error("write", e))?;
        fs::rename(&tmp, &path).await.map_err(|e| io_error("replace", e))?;

        Ok(())
    }
}
