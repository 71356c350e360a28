//! Direct HTTP transport
//!
//! Talks to the API over reqwest with a bearer token, for deployments that
//! do not have the helper binary installed. Any received response maps to a
//! completed invocation: the API reports its own failures (rate limits
//! included) inside the body, and the caller inspects those.

use super::{Transport, TransportOutput};
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Default request timeout for one page fetch
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport that issues bearer-authenticated GET requests.
#[derive(Debug, Clone)]
pub struct BearerTransport {
    client: Client,
    base_url: String,
}

impl BearerTransport {
    /// Create a transport against `base_url` with the given bearer token
    pub fn new(base_url: impl Into<String>, token: &str) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| Error::config("bearer token contains invalid header characters"))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("follower-archiver/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// The API base URL this transport targets
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, endpoint: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = endpoint.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

#[async_trait]
impl Transport for BearerTransport {
    async fn fetch(&self, endpoint: &str) -> Result<TransportOutput> {
        let url = self.build_url(endpoint);
        debug!(%url, "sending request");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        debug!(http_status = status.as_u16(), bytes = body.len(), "response received");

        // The body carries the application-level verdict even on non-2xx
        // responses, so a received response is always a completed call.
        Ok(TransportOutput::ok(body))
    }
}
