//! Helper-command transport
//!
//! Spawns an external authenticated request helper (twurl by default) once
//! per request. The helper owns credentials, signing, and the HTTP call; we
//! only pass the endpoint through and capture what comes back.

use super::{Transport, TransportOutput};
use crate::error::{Error, Result};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

/// Transport that delegates each request to a helper command.
///
/// The endpoint string is appended as the final argument, so
/// `CommandTransport::new("twurl")` runs `twurl <endpoint>` exactly like the
/// interactive tool.
#[derive(Debug, Clone)]
pub struct CommandTransport {
    program: String,
    base_args: Vec<String>,
}

impl CommandTransport {
    /// Create a transport that runs `program <endpoint>`
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            base_args: Vec::new(),
        }
    }

    /// Create a transport that runs `program <args..> <endpoint>`
    pub fn with_args<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            base_args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// The helper program this transport runs
    pub fn program(&self) -> &str {
        &self.program
    }
}

#[async_trait]
impl Transport for CommandTransport {
    async fn fetch(&self, endpoint: &str) -> Result<TransportOutput> {
        debug!(program = %self.program, endpoint, "spawning request helper");

        let output = Command::new(&self.program)
            .args(&self.base_args)
            .arg(endpoint)
            .output()
            .await
            .map_err(|e| Error::transport(format!("failed to run '{}': {e}", self.program)))?;

        // A helper killed by a signal has no exit code; treat it as a
        // generic non-zero status.
        let status = output.status.code().unwrap_or(-1);

        Ok(TransportOutput::new(status, output.stdout))
    }
}
