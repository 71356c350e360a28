//! Driver configuration and statistics

use crate::cursor::Cursor;
use std::time::Duration;

/// Default backoff after a recoverable fetch failure.
///
/// Matches the rate-limit window of the followers endpoint, which is the
/// dominant failure in practice.
pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(15 * 60);

/// Configuration for a pagination run
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Cursor the run starts from
    pub start_cursor: Cursor,
    /// Fixed sleep applied after every recoverable fetch failure
    pub backoff: Duration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            start_cursor: Cursor::start(),
            backoff: DEFAULT_BACKOFF,
        }
    }
}

impl DriverConfig {
    /// Create a config with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the run with a specific start cursor
    #[must_use]
    pub fn with_start_cursor(mut self, cursor: Cursor) -> Self {
        self.start_cursor = cursor;
        self
    }

    /// Set the backoff duration
    #[must_use]
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }
}

/// Statistics from a pagination run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Requests issued, retries included
    pub requests: u64,
    /// Recoverable failures that triggered a backoff sleep
    pub retries: u64,
    /// Pages persisted to the store
    pub pages_persisted: u64,
}

impl RunStats {
    /// Create empty stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one issued request
    pub fn add_request(&mut self) {
        self.requests += 1;
    }

    /// Count one recoverable failure
    pub fn add_retry(&mut self) {
        self.retries += 1;
    }

    /// Count one persisted page
    pub fn add_page(&mut self) {
        self.pages_persisted += 1;
    }
}
