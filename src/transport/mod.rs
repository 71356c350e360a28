//! Request transports
//!
//! The driver never talks to the network itself; it hands an endpoint string
//! (path plus query) to a `Transport` and gets back an exit status and raw
//! bytes. Authentication lives entirely behind this seam.
//!
//! Two implementations are provided:
//! - `CommandTransport` spawns an authenticated helper such as `twurl` for
//!   every request, the way the original tooling works.
//! - `BearerTransport` talks to the API directly with a bearer token.

mod command;
mod http;

pub use command::CommandTransport;
pub use http::BearerTransport;

use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;

/// Raw outcome of one transport invocation.
///
/// Status 0 means the call completed and `stdout` holds a UTF-8 JSON
/// document, which may itself encode an application error. Any non-zero
/// status is a hard transport failure with no usable payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportOutput {
    /// Exit status of the invocation
    pub status: i32,
    /// Captured response bytes
    pub stdout: Bytes,
}

impl TransportOutput {
    /// Create an output from a status and body
    pub fn new(status: i32, stdout: impl Into<Bytes>) -> Self {
        Self {
            status,
            stdout: stdout.into(),
        }
    }

    /// Create a completed (status 0) output
    pub fn ok(stdout: impl Into<Bytes>) -> Self {
        Self::new(0, stdout)
    }

    /// Whether the invocation completed and the payload is usable
    pub fn is_success(&self) -> bool {
        self.status == 0
    }
}

/// Executes one authenticated request against the API.
///
/// Implementations return `Err` only when the request could not be issued at
/// all; a completed call with a bad exit status is reported through
/// `TransportOutput` so the caller can apply its own recovery policy.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute the request described by `endpoint` (path plus query string)
    async fn fetch(&self, endpoint: &str) -> Result<TransportOutput>;
}
