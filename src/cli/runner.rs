//! CLI runner - wires the parsed arguments into a driver and executes it

use crate::cli::commands::{Cli, TransportKind};
use crate::cursor::Cursor;
use crate::driver::{DriverConfig, PaginationDriver};
use crate::error::{Error, Result};
use crate::store::JsonDirStore;
use crate::transport::{BearerTransport, CommandTransport, Transport};
use std::time::Duration;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the archive to completion
    pub async fn run(&self) -> Result<()> {
        let transport = self.build_transport()?;
        let store = JsonDirStore::new(&self.cli.output_dir);

        info!(
            output_dir = %store.dir().display(),
            start_cursor = %self.driver_config().start_cursor,
            "starting follower archive"
        );

        let mut driver =
            PaginationDriver::new(transport, Box::new(store)).with_config(self.driver_config());
        let stats = driver.run().await?;

        info!(
            requests = stats.requests,
            retries = stats.retries,
            pages = stats.pages_persisted,
            "archive complete"
        );
        Ok(())
    }

    fn build_transport(&self) -> Result<Box<dyn Transport>> {
        match self.cli.transport {
            TransportKind::Twurl => Ok(Box::new(CommandTransport::new(&self.cli.twurl_bin))),
            TransportKind::Http => {
                let token = std::env::var(&self.cli.bearer_token_env).map_err(|_| {
                    Error::config(format!(
                        "environment variable {} is not set",
                        self.cli.bearer_token_env
                    ))
                })?;
                Ok(Box::new(BearerTransport::new(&self.cli.api_base, &token)?))
            }
        }
    }

    fn driver_config(&self) -> DriverConfig {
        let mut config =
            DriverConfig::new().with_backoff(Duration::from_secs(self.cli.backoff_secs));
        if let Some(cursor) = &self.cli.cursor {
            config = config.with_start_cursor(Cursor::new(cursor));
        }
        config
    }
}
