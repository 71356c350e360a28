//! Pagination cursor
//!
//! The followers API hands back an opaque position token with every page.
//! Two values are sentinels: `-1` asks for the first page and `0` signals
//! that no further pages exist. Cursors are compared as strings and never
//! parsed numerically.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cursor value that requests the first page.
pub const START_CURSOR: &str = "-1";

/// Cursor value signaling that pagination is exhausted.
pub const TERMINAL_CURSOR: &str = "0";

/// Opaque pagination token for the followers listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    /// Create a cursor from a raw token value
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The start-of-pagination sentinel
    pub fn start() -> Self {
        Self(START_CURSOR.to_string())
    }

    /// Check whether this cursor is the end-of-pagination sentinel
    pub fn is_terminal(&self) -> bool {
        self.0 == TERMINAL_CURSOR
    }

    /// The raw token value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Cursor {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for Cursor {
    fn from(token: String) -> Self {
        Self(token)
    }
}
