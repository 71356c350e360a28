//! Directory-backed page store

use super::Store;
use crate::cursor::Cursor;
use crate::error::{Error, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Store that writes one `followers_<CURSOR>.json` file per page.
///
/// Writes go to a temp file first and are renamed into place, so an
/// interrupted run never leaves a half-written page on disk.
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    dir: PathBuf,
}

impl JsonDirStore {
    /// Create a store rooted at `dir`. The directory is created on first
    /// persist if it does not exist.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// The file a given cursor's page lands in
    pub fn path_for(&self, cursor: &Cursor) -> PathBuf {
        self.dir.join(format!("followers_{cursor}.json"))
    }

    /// The output directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl Store for JsonDirStore {
    async fn persist(&self, cursor: &Cursor, page: &Value) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| Error::store(format!("failed to create output directory: {e}")))?;

        let contents = serde_json::to_vec(page)
            .map_err(|e| Error::store(format!("failed to serialize page: {e}")))?;

        let path = self.path_for(cursor);
        let temp_path = path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, &contents)
            .await
            .map_err(|e| Error::store(format!("failed to write page file: {e}")))?;

        tokio::fs::rename(&temp_path, &path)
            .await
            .map_err(|e| Error::store(format!("failed to rename page file: {e}")))?;

        debug!(path = %path.display(), bytes = contents.len(), "page written");
        Ok(())
    }
}
