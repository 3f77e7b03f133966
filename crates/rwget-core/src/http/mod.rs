//! Streaming HTTP GET.
//!
//! Uses the curl crate (libcurl) for the request. Header lines of the final
//! response (after redirects) are parsed into a [`ResponseHead`] and handed to
//! a [`BodySink`] before the first body chunk; the body follows in chunks of
//! at most `chunk_size` bytes. Blocking: call from `spawn_blocking` in async code.

mod parse;

use std::cell::RefCell;
use std::str;
use std::time::Duration;

use crate::config::RwgetConfig;
use crate::error::WgetError;
use crate::url_model;

/// Per-request libcurl settings.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub connect_timeout: Duration,
    pub max_redirections: u32,
    pub user_agent: Option<String>,
    /// Largest slice passed to `BodySink::on_chunk`; also libcurl's receive buffer.
    pub chunk_size: usize,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self::from(&RwgetConfig::default())
    }
}

impl From<&RwgetConfig> for HttpOptions {
    fn from(cfg: &RwgetConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            max_redirections: cfg.max_redirections,
            user_agent: cfg.user_agent.clone(),
            chunk_size: cfg.chunk_size.max(1),
        }
    }
}

/// Status line and the headers rwget displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHead {
    /// 0 when the response carried no HTTP status line.
    pub status_code: u32,
    pub reason: String,
    pub content_length: Option<u64>,
    pub content_type: Option<String>,
}

impl ResponseHead {
    /// `"200 OK"`, `"404 Not Found"`, ...
    pub fn status_line(&self) -> String {
        if self.reason.is_empty() {
            self.status_code.to_string()
        } else {
            format!("{} {}", self.status_code, self.reason)
        }
    }

    /// Only a plain 200 counts as success for the sequential downloader.
    pub fn is_ok(&self) -> bool {
        self.status_code == 200
    }

    /// Declared length, or `-` when the server sent none.
    pub fn length_display(&self) -> String {
        self.content_length
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

/// Receives a response as it streams in.
pub trait BodySink {
    /// Called exactly once, before any chunk (or at the end for an empty body).
    /// Returning an error aborts the transfer.
    fn on_head(&mut self, head: &ResponseHead) -> Result<(), WgetError>;

    /// Called for each body chunk in order. Returning an error aborts the transfer.
    fn on_chunk(&mut self, chunk: &[u8]) -> Result<(), WgetError>;
}

/// Performs a GET on `url`, following redirects, streaming into `sink`.
///
/// Fails with `UnsupportedScheme` for anything but `http://`/`https://`,
/// before libcurl sees the URL.
///
/// Errors returned by the sink take precedence over libcurl's own
/// "write error" that results from aborting the transfer.
pub fn get(
    url: &str,
    opts: &HttpOptions,
    sink: &mut dyn BodySink,
) -> Result<ResponseHead, WgetError> {
    let transport = |source: curl::Error| WgetError::Transport {
        url: url.to_string(),
        source,
    };

    url_model::require_http_scheme(url)?;

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(transport)?;
    easy.follow_location(true).map_err(transport)?;
    easy.max_redirections(opts.max_redirections)
        .map_err(transport)?;
    easy.connect_timeout(opts.connect_timeout)
        .map_err(transport)?;
    easy.buffer_size(opts.chunk_size).map_err(transport)?;
    if let Some(ua) = &opts.user_agent {
        easy.useragent(ua).map_err(transport)?;
    }

    let header_lines = RefCell::new(Vec::<String>::new());
    let mut head: Option<ResponseHead> = None;
    let mut failure: Option<WgetError> = None;
    let chunk_size = opts.chunk_size.max(1);

    let performed = {
        let mut transfer = easy.transfer();
        transfer
            .header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    let line = s.trim_end();
                    let mut lines = header_lines.borrow_mut();
                    // Each redirect hop starts a new block.
                    if line.starts_with("HTTP/") {
                        lines.clear();
                    }
                    if !line.is_empty() {
                        lines.push(line.to_string());
                    }
                }
                true
            })
            .map_err(transport)?;
        transfer
            .write_function(|data| {
                if head.is_none() {
                    let parsed = parse::parse_head(&header_lines.borrow());
                    if let Err(e) = sink.on_head(&parsed) {
                        failure = Some(e);
                        return Ok(0); // abort transfer
                    }
                    head = Some(parsed);
                }
                for chunk in data.chunks(chunk_size) {
                    if let Err(e) = sink.on_chunk(chunk) {
                        failure = Some(e);
                        return Ok(0);
                    }
                }
                Ok(data.len())
            })
            .map_err(transport)?;
        transfer.perform()
    };

    if let Some(err) = failure {
        return Err(err);
    }
    performed.map_err(transport)?;

    let head = match head {
        Some(h) => h,
        None => {
            let parsed = parse::parse_head(&header_lines.borrow());
            sink.on_head(&parsed)?;
            parsed
        }
    };
    tracing::debug!(url, status = head.status_code, "GET finished");
    Ok(head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_follow_config() {
        let cfg = RwgetConfig {
            chunk_size: 0,
            connect_timeout_secs: 7,
            user_agent: Some("ua".into()),
            ..RwgetConfig::default()
        };
        let opts = HttpOptions::from(&cfg);
        assert_eq!(opts.chunk_size, 1);
        assert_eq!(opts.connect_timeout, Duration::from_secs(7));
        assert_eq!(opts.user_agent.as_deref(), Some("ua"));
    }

    #[test]
    fn length_display_dash_when_unknown() {
        let head = ResponseHead {
            status_code: 200,
            reason: "OK".into(),
            content_length: None,
            content_type: None,
        };
        assert_eq!(head.length_display(), "-");
        let sized = ResponseHead {
            content_length: Some(100),
            ..head
        };
        assert_eq!(sized.length_display(), "100");
    }
}
