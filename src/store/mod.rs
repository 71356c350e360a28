//! Page persistence
//!
//! Each successfully fetched page is handed to a `Store` together with the
//! cursor that produced it. Keys are cursor-derived so the output set is
//! append-only, collision-free, and reproducible from the cursors visited.

mod dir;

pub use dir::JsonDirStore;

use crate::cursor::Cursor;
use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Persists one decoded page per cursor.
#[async_trait]
pub trait Store: Send + Sync {
    /// Persist `page` verbatim under a key derived from `cursor`
    async fn persist(&self, cursor: &Cursor, page: &Value) -> Result<()>;
}
