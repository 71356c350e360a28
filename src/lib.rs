//! # follower-archiver
//!
//! A cursor-following archiver for the Twitter followers API.
//!
//! The tool pages through `GET /1.1/followers/list.json`, writing each page
//! verbatim to durable storage and riding out rate limits with a fixed
//! backoff sleep. The cursor only moves once a page has been parsed, found
//! free of application errors, and persisted, so an interrupted run leaves a
//! clean, cursor-keyed set of files behind.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use follower_archiver::driver::PaginationDriver;
//! use follower_archiver::store::JsonDirStore;
//! use follower_archiver::transport::CommandTransport;
//! use follower_archiver::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let transport = CommandTransport::new("twurl");
//!     let store = JsonDirStore::new("followers");
//!
//!     let mut driver = PaginationDriver::new(Box::new(transport), Box::new(store));
//!     let stats = driver.run().await?;
//!
//!     eprintln!("{} pages archived", stats.pages_persisted);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                  Pagination Driver                  │
//! │   cursor -> fetch -> parse -> persist -> advance    │
//! │      ^                                     |        │
//! │      +------ fixed backoff on failure <----+        │
//! └───────────┬─────────────────────────┬───────────────┘
//!             │                         │
//!         Transport                   Store
//!   (twurl helper / HTTP)     (JSON file per cursor)
//! ```

/// Error types
pub mod error;

/// Pagination cursor
pub mod cursor;

/// Page parsing and validation
pub mod page;

/// Request transports
pub mod transport;

/// Page persistence
pub mod store;

/// Pagination driver
pub mod driver;

/// Command-line interface
pub mod cli;

pub use cursor::Cursor;
pub use error::{Error, FetchError, Result};
pub use page::Page;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
