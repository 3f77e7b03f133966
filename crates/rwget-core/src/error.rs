//! Error taxonomy for rwget downloads.
//!
//! Input, transport, filesystem and policy errors. Each variant knows the
//! wget-style line the CLI shows when it ends the run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WgetError {
    /// No positional URL and no `--input` file.
    #[error("URL is required")]
    MissingUrl,

    /// The batch input file could not be opened or read.
    #[error("cannot read input file {}: {source}", .path.display())]
    InputFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The batch input file had no usable lines.
    #[error("The file is empty")]
    EmptyInput,

    #[error("invalid rate limit {value:?}")]
    InvalidRateLimit { value: String },

    /// URL without a host segment (`scheme://host/...`).
    #[error("malformed URL {0:?}: no host segment")]
    InvalidUrl(String),

    /// Only `http://` and `https://` URLs are fetched.
    #[error("unsupported protocol scheme {scheme:?}")]
    UnsupportedScheme { url: String, scheme: String },

    /// libcurl failed (DNS, connect, timeout, broken transfer).
    #[error("{source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// Sequential path only: the server answered with something other than 200.
    #[error("status {status}")]
    HttpStatus { code: u32, status: String },

    #[error("cannot create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot create file {}: {source}", .path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// More than `limit` bytes were received; the partial file stays on disk.
    #[error("download exceeded the limit of {limit} bytes")]
    RateLimitExceeded { limit: u64 },

    #[error("cannot write log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WgetError {
    /// The line written to the report when this error ends a run.
    pub fn report_line(&self) -> String {
        match self {
            WgetError::MissingUrl | WgetError::EmptyInput => format!("{}\n", self),
            WgetError::InvalidRateLimit { .. } => {
                "Error rate limit value: (e.g.,200K, 400k or 2M)\n".to_string()
            }
            WgetError::RateLimitExceeded { limit } => format!(
                "\nSorry this file exceed octed rate of the bandwidth, limited at: {} octed\n",
                limit
            ),
            other => format!("Error: {}\n", other),
        }
    }

    /// The underlying cause as plain text (used in batch outcome lines).
    pub fn cause(&self) -> String {
        match self {
            WgetError::InputFile { source, .. }
            | WgetError::CreateDir { source, .. }
            | WgetError::CreateFile { source, .. }
            | WgetError::Write { source, .. }
            | WgetError::LogFile { source, .. } => source.to_string(),
            WgetError::Transport { source, .. } => source.to_string(),
            other => other.to_string(),
        }
    }
}
