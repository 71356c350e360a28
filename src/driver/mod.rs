//! Pagination driver
//!
//! Owns the cursor and the request/parse/persist/advance cycle. One page is
//! in flight at a time; the cursor moves exactly when a page has been parsed,
//! found free of application errors, and persisted. Any recoverable failure
//! logs one diagnostic line and sleeps a fixed duration before the same
//! cursor is retried, with no retry cap: the usual cause is rate limiting,
//! and waiting out the window is the recovery.

mod types;

pub use types::{DriverConfig, RunStats, DEFAULT_BACKOFF};

use crate::cursor::Cursor;
use crate::error::{FetchError, Result};
use crate::page::Page;
use crate::store::Store;
use crate::transport::Transport;
use tracing::{debug, warn};

/// Records requested per page. 200 is the endpoint's maximum.
const PAGE_SIZE: u32 = 200;

/// Build the request target for one page of the follower listing
fn endpoint_for(cursor: &Cursor) -> String {
    format!(
        "/1.1/followers/list.json?skip_status=true&include_user_entities=false&count={PAGE_SIZE}&cursor={cursor}"
    )
}

/// Drives the follower listing from the start cursor to exhaustion.
pub struct PaginationDriver {
    transport: Box<dyn Transport>,
    store: Box<dyn Store>,
    config: DriverConfig,
}

impl PaginationDriver {
    /// Create a driver with default configuration
    pub fn new(transport: Box<dyn Transport>, store: Box<dyn Store>) -> Self {
        Self {
            transport,
            store,
            config: DriverConfig::default(),
        }
    }

    /// Set the driver configuration
    #[must_use]
    pub fn with_config(mut self, config: DriverConfig) -> Self {
        self.config = config;
        self
    }

    /// Fetch every remaining page, persisting each one as it lands.
    ///
    /// Returns only once the terminal cursor is reached or the store fails;
    /// fetch-side failures are retried indefinitely.
    pub async fn run(&mut self) -> Result<RunStats> {
        let mut stats = RunStats::new();
        let mut cursor = self.config.start_cursor.clone();

        while !cursor.is_terminal() {
            stats.add_request();

            match self.fetch_page(&cursor).await {
                Ok(page) => {
                    let (body, next_cursor) = page.into_parts();
                    self.store.persist(&cursor, &body).await?;
                    stats.add_page();
                    debug!(cursor = %cursor, next = %next_cursor, "page persisted");
                    cursor = next_cursor;
                }
                Err(err) => {
                    stats.add_retry();
                    warn!(
                        "{err}, sleeping for {}s before retrying",
                        self.config.backoff.as_secs()
                    );
                    tokio::time::sleep(self.config.backoff).await;
                }
            }
        }

        println!("Finished obtaining followers.");
        Ok(stats)
    }

    /// Fetch and validate the page at `cursor`.
    ///
    /// Collapses every failure mode of the request/decode/check unit into
    /// the single recoverable kind inspected by the loop.
    async fn fetch_page(&self, cursor: &Cursor) -> std::result::Result<Page, FetchError> {
        let endpoint = endpoint_for(cursor);

        let output = self
            .transport
            .fetch(&endpoint)
            .await
            .map_err(|e| FetchError::transport(e.to_string()))?;

        if !output.is_success() {
            return Err(FetchError::transport(format!(
                "request '{endpoint}' did not execute correctly (status {})",
                output.status
            )));
        }

        Page::parse(&output.stdout)
    }
}

#[cfg(test)]
mod tests;
