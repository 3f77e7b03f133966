//! Single-URL download with wget-style report lines.
//!
//! Start → Resolve → Connect → HeadersReceived → Streaming → Done. Any error
//! ends the download at the step it happens in; the caller reports it and
//! exits. A partially written file is left on disk as-is.

mod progress;

pub use progress::ProgressState;

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use crate::config::RwgetConfig;
use crate::error::WgetError;
use crate::http::{self, BodySink, HttpOptions, ResponseHead};
use crate::report::ReportWriter;
use crate::storage;
use crate::url_model;

/// Per-run options that replace wget's global flags.
#[derive(Debug, Clone, Default)]
pub struct DownloadOptions {
    /// `-O`: save under this name instead of the URL's last segment.
    pub output_name: Option<String>,
    /// `-P`: directory to save into, created if missing.
    pub directory: Option<PathBuf>,
    /// `-r`: abort once more than this many bytes were received.
    pub rate_limit: Option<u64>,
}

/// What a finished download wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadReport {
    pub path: PathBuf,
    pub total_bytes: u64,
    pub content_length: Option<u64>,
    pub status: String,
}

/// wget's `2006-01-02 15:04:05` style, local time.
pub fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Downloads `url` into a single file, writing progress to `report`.
///
/// Fails on a malformed URL, transport errors, any status other than 200
/// (before the file is created), filesystem errors, and when the rate-limit
/// ceiling is passed.
pub fn download(
    url: &str,
    opts: &DownloadOptions,
    cfg: &RwgetConfig,
    report: &ReportWriter,
) -> Result<DownloadReport, WgetError> {
    report.entry(&format!("--{}--  {}\n", timestamp(), url));

    let host = url_model::host_segment(url)?;
    report.entry(&format!("Resolving {}... ", host));
    tracing::info!(url, host, "starting download");

    let mut sink = SequentialSink {
        url,
        host,
        opts,
        fallback_filename: &cfg.fallback_filename,
        report,
        target: None,
    };
    let head = http::get(url, &HttpOptions::from(cfg), &mut sink)?;

    let Some(target) = sink.target else {
        return Err(WgetError::HttpStatus {
            code: head.status_code,
            status: head.status_line(),
        });
    };
    drop(target.file);

    let total = target.progress.total();
    let declared = head.length_display();
    report.entry(&format!(
        "\n\n{} ({} bytes) saved [saved {}/{}]\n",
        target.display, total, total, declared
    ));
    report.entry(&format!(
        "{} - ‘{}’ saved [{}/{}]\n",
        timestamp(),
        target.display,
        total,
        declared
    ));
    tracing::info!(path = %target.display, bytes = total, "download finished");

    Ok(DownloadReport {
        path: target.path,
        total_bytes: total,
        content_length: head.content_length,
        status: head.status_line(),
    })
}

/// Open destination plus its running total.
struct Target {
    path: PathBuf,
    display: String,
    file: File,
    progress: ProgressState,
}

struct SequentialSink<'a> {
    url: &'a str,
    host: &'a str,
    opts: &'a DownloadOptions,
    fallback_filename: &'a str,
    report: &'a ReportWriter,
    target: Option<Target>,
}

impl SequentialSink<'_> {
    fn resolve_path(&self) -> Result<PathBuf, WgetError> {
        let name = match &self.opts.output_name {
            Some(name) => name.clone(),
            None => url_model::derive_filename(self.url, self.fallback_filename),
        };
        if let Some(dir) = &self.opts.directory {
            storage::ensure_dir(dir)?;
        }
        Ok(storage::destination_path(
            self.opts.directory.as_deref(),
            &name,
        ))
    }
}

impl BodySink for SequentialSink<'_> {
    fn on_head(&mut self, head: &ResponseHead) -> Result<(), WgetError> {
        self.report
            .entry(&format!("Connecting to {}... connected.\n", self.host));
        self.report.entry(&format!(
            "HTTP request sent, awaiting response... {}\n",
            head.status_line()
        ));
        if !head.is_ok() {
            tracing::warn!(url = self.url, status = head.status_code, "rejected response");
            return Err(WgetError::HttpStatus {
                code: head.status_code,
                status: head.status_line(),
            });
        }
        self.report.entry(&format!(
            "Length: {} [{}]\n",
            head.length_display(),
            head.content_type.as_deref().unwrap_or("")
        ));

        let path = self.resolve_path()?;
        let display = path.display().to_string();
        self.report.entry(&format!("Saving to: ‘{}’\n\n", display));
        let file = storage::create_destination(&path)?;
        self.target = Some(Target {
            path,
            display,
            file,
            progress: ProgressState::new(head.content_length),
        });
        Ok(())
    }

    fn on_chunk(&mut self, chunk: &[u8]) -> Result<(), WgetError> {
        // on_head always runs first and either fails or sets the target.
        let Some(target) = self.target.as_mut() else {
            return Ok(());
        };
        target
            .file
            .write_all(chunk)
            .map_err(|source| WgetError::Write {
                path: target.path.clone(),
                source,
            })?;
        target.progress.advance(chunk.len());

        if let Some(limit) = self.opts.rate_limit {
            if target.progress.exceeds(limit) {
                tracing::warn!(limit, received = target.progress.total(), "byte ceiling exceeded");
                return Err(WgetError::RateLimitExceeded { limit });
            }
        }
        self.report.entry(&target.progress.line(&target.display));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_shape() {
        let ts = timestamp();
        assert_eq!(ts.len(), 19);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], " ");
        assert_eq!(&ts[13..14], ":");
    }

    #[test]
    fn malformed_url_fails_before_network() {
        let report = ReportWriter::buffered();
        let err = download(
            "not-a-url",
            &DownloadOptions::default(),
            &RwgetConfig::default(),
            &report,
        )
        .unwrap_err();
        assert!(matches!(err, WgetError::InvalidUrl(_)));
        assert!(report.contents().starts_with("--"));
        assert!(!report.contents().contains("Resolving"));
    }

    #[test]
    fn resolve_path_prefers_output_name() {
        let dir = tempfile::tempdir().unwrap();
        let opts = DownloadOptions {
            output_name: Some("renamed.bin".into()),
            directory: Some(dir.path().join("sub")),
            rate_limit: None,
        };
        let report = ReportWriter::buffered();
        let sink = SequentialSink {
            url: "http://host/original.bin",
            host: "host",
            opts: &opts,
            fallback_filename: "download",
            report: &report,
            target: None,
        };
        let path = sink.resolve_path().unwrap();
        assert_eq!(path, dir.path().join("sub").join("renamed.bin"));
        assert!(dir.path().join("sub").is_dir());
    }

    #[test]
    fn resolve_path_falls_back_for_trailing_slash() {
        let opts = DownloadOptions::default();
        let report = ReportWriter::buffered();
        let sink = SequentialSink {
            url: "http://host/dir/",
            host: "host",
            opts: &opts,
            fallback_filename: "download",
            report: &report,
            target: None,
        };
        assert_eq!(sink.resolve_path().unwrap(), PathBuf::from("download"));
    }
}
