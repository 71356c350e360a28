//! Error types for follower-archiver
//!
//! Two layers: `Error` is the crate-level error returned by public APIs, and
//! `FetchError` is the single recoverable kind produced by the
//! fetch-and-validate step and consumed only by the driver loop.

use thiserror::Error;

/// The main error type for follower-archiver
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Store error: {message}")]
    Store { message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a store error
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }
}

/// Result type alias for follower-archiver
pub type Result<T> = std::result::Result<T, Error>;

/// A recoverable page-fetch failure.
///
/// Every class is handled identically by the driver: one diagnostic line,
/// one fixed-duration sleep, then the same cursor is retried. The dominant
/// real-world cause is rate limiting, which self-resolves after a wait, so
/// there is no escalation path and no retry cap.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The transport could not complete the request (spawn failure,
    /// connection failure, or a non-zero helper exit status).
    #[error("transport failure: {message}")]
    Transport { message: String },

    /// The response body was not a usable JSON page (bad UTF-8, bad JSON,
    /// or no `next_cursor_str` field).
    #[error("malformed response: {message}")]
    Decode { message: String },

    /// The API returned an error list instead of a page.
    #[error("API error: {message}")]
    Api { message: String },
}

impl FetchError {
    /// Create a transport-class error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a decode-class error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an API-class error from the messages of an error list
    pub fn api<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = messages
            .into_iter()
            .map(|m| m.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Self::Api { message: joined }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::store("disk full");
        assert_eq!(err.to_string(), "Store error: disk full");
    }

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::transport("helper exited with status 1");
        assert_eq!(
            err.to_string(),
            "transport failure: helper exited with status 1"
        );

        let err = FetchError::decode("expected value at line 1 column 1");
        assert_eq!(
            err.to_string(),
            "malformed response: expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_api_error_joins_messages() {
        let err = FetchError::api(["Rate limit exceeded", "Over capacity"]);
        assert_eq!(
            err.to_string(),
            "API error: Rate limit exceeded, Over capacity"
        );
    }
}
