//! One batch download: GET a URL and copy the body into its file.

use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::WgetError;
use crate::http::{self, BodySink, HttpOptions, ResponseHead};
use crate::storage;

use super::reader::DownloadRequest;

/// Terminal result of one batch download. Exactly one per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Downloaded { filename: String, bytes: u64 },
    /// No response (DNS, connect, timeout) or a non-HTTP URL.
    RequestFailed { url: String, filename: String, error: String },
    CreateFailed { filename: String, error: String },
    /// The body could not be written or the connection broke mid-body.
    WriteFailed { filename: String, error: String },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Downloaded { .. })
    }

    pub fn filename(&self) -> &str {
        match self {
            Outcome::Downloaded { filename, .. }
            | Outcome::RequestFailed { filename, .. }
            | Outcome::CreateFailed { filename, .. }
            | Outcome::WriteFailed { filename, .. } => filename,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Downloaded { filename, .. } => write!(f, "Successfully downloaded {}", filename),
            Outcome::RequestFailed { url, error, .. } => {
                write!(f, "Failed to download {}: {}", url, error)
            }
            Outcome::CreateFailed { filename, error } => {
                write!(f, "Failed to create file {}: {}", filename, error)
            }
            Outcome::WriteFailed { filename, error } => {
                write!(f, "Failed to write to file {}: {}", filename, error)
            }
        }
    }
}

/// Copies the body into a file created once the response arrives.
/// The status code is deliberately not checked: an error page is saved like any body.
struct FileSink {
    path: PathBuf,
    file: Option<File>,
    bytes: u64,
}

impl BodySink for FileSink {
    fn on_head(&mut self, _head: &ResponseHead) -> Result<(), WgetError> {
        self.file = Some(storage::create_destination(&self.path)?);
        Ok(())
    }

    fn on_chunk(&mut self, chunk: &[u8]) -> Result<(), WgetError> {
        let Some(file) = self.file.as_mut() else {
            return Ok(());
        };
        file.write_all(chunk).map_err(|source| WgetError::Write {
            path: self.path.clone(),
            source,
        })?;
        self.bytes += chunk.len() as u64;
        Ok(())
    }
}

/// Downloads `request` into `dir` (or the working directory). Blocking.
pub fn download_task(request: &DownloadRequest, dir: Option<&Path>, opts: &HttpOptions) -> Outcome {
    let filename = request.filename.clone();
    let mut sink = FileSink {
        path: storage::destination_path(dir, &request.filename),
        file: None,
        bytes: 0,
    };

    match http::get(&request.url, opts, &mut sink) {
        Ok(_) => Outcome::Downloaded {
            filename,
            bytes: sink.bytes,
        },
        Err(err @ WgetError::CreateFile { .. }) => Outcome::CreateFailed {
            filename,
            error: err.cause(),
        },
        Err(err @ (WgetError::Transport { .. } | WgetError::UnsupportedScheme { .. }))
            if sink.file.is_none() =>
        {
            Outcome::RequestFailed {
                url: request.url.clone(),
                filename,
                error: err.cause(),
            }
        }
        Err(err) => Outcome::WriteFailed {
            filename,
            error: err.cause(),
        },
    }
}
