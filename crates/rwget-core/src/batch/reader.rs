//! URL list parsing.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::WgetError;
use crate::url_model;

/// One URL and the file it is saved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: String,
    pub filename: String,
}

/// URL → destination filename. A repeated URL replaces the earlier entry.
#[derive(Debug, Clone, Default)]
pub struct UrlSet {
    entries: HashMap<String, String>,
}

impl UrlSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `url` with its derived filename.
    pub fn insert(&mut self, url: &str, fallback_filename: &str) {
        let filename = url_model::derive_filename(url, fallback_filename);
        self.entries.insert(url.to_string(), filename);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn filename(&self, url: &str) -> Option<&str> {
        self.entries.get(url).map(String::as_str)
    }

    pub fn into_requests(self) -> impl Iterator<Item = DownloadRequest> {
        self.entries
            .into_iter()
            .map(|(url, filename)| DownloadRequest { url, filename })
    }
}

/// Reads one URL per line from `path`, skipping blank lines.
///
/// Fails with `InputFile` if the file cannot be read and `EmptyInput` if no
/// line holds a URL.
pub fn read_url_set(path: &Path, fallback_filename: &str) -> Result<UrlSet, WgetError> {
    let input_err = |source| WgetError::InputFile {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(input_err)?;

    let mut set = UrlSet::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(input_err)?;
        let url = line.trim();
        if url.is_empty() {
            continue;
        }
        set.insert(url, fallback_filename);
    }

    if set.is_empty() {
        return Err(WgetError::EmptyInput);
    }
    tracing::debug!(path = %path.display(), urls = set.len(), "read URL list");
    Ok(set)
}
