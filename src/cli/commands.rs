//! CLI arguments

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Archive every page of the authenticated account's follower listing
#[derive(Parser, Debug)]
#[command(name = "follower-archiver")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory the page files are written into
    #[arg(short, long, default_value = "followers")]
    pub output_dir: PathBuf,

    /// Cursor to start from, for operators resuming a run by hand
    #[arg(long)]
    pub cursor: Option<String>,

    /// Seconds to sleep after a recoverable fetch failure
    #[arg(long, default_value_t = 900)]
    pub backoff_secs: u64,

    /// How requests are executed
    #[arg(long, value_enum, default_value = "twurl")]
    pub transport: TransportKind,

    /// Helper binary used by the twurl transport
    #[arg(long, default_value = "twurl")]
    pub twurl_bin: String,

    /// API base URL used by the http transport
    #[arg(long, default_value = "https://api.twitter.com")]
    pub api_base: String,

    /// Environment variable holding the bearer token for the http transport
    #[arg(long, default_value = "TWITTER_BEARER_TOKEN")]
    pub bearer_token_env: String,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Available transport implementations
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TransportKind {
    /// Delegate each request to the configured helper binary on PATH
    Twurl,
    /// Talk to the API directly with a bearer token
    Http,
}
