//! URL modeling and filename derivation.
//!
//! Destination names come from the last `/`-delimited segment of the URL, the
//! same way wget names files when no `-O` is given.

mod path;

pub use path::{filename_from_url, host_segment, require_http_scheme};

/// Derives the destination filename for `url`, or `fallback` when the URL ends
/// in `/` (or its last segment is `.`/`..`).
///
/// # Examples
///
/// - `derive_filename("http://host/a/b/file.txt", "download")` → `"file.txt"`
/// - `derive_filename("http://host/dir/", "download")` → `"download"`
pub fn derive_filename(url: &str, fallback: &str) -> String {
    filename_from_url(url)
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}
