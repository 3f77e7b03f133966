//! Segment extraction from raw URL strings.

use crate::error::WgetError;

/// Returns the last `/`-delimited segment of `url`.
///
/// Returns `None` for an empty segment (URL ending in `/`) and for `.`/`..`,
/// which must never become a file name.
pub fn filename_from_url(url: &str) -> Option<&str> {
    let segment = url.rsplit('/').next()?;
    if segment.is_empty() || segment == "." || segment == ".." {
        return None;
    }
    Some(segment)
}

/// Accepts `http://` and `https://` URLs (scheme matched case-insensitively).
///
/// libcurl speaks many more protocols (`file`, `ftp`, `scp`, ...); none of
/// them may be reached through rwget.
pub fn require_http_scheme(url: &str) -> Result<(), WgetError> {
    let scheme = url.split_once("://").map(|(s, _)| s).unwrap_or("");
    if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https") {
        return Ok(());
    }
    Err(WgetError::UnsupportedScheme {
        url: url.to_string(),
        scheme: scheme.to_string(),
    })
}

/// Returns the host part of `scheme://host/...`: the third `/`-delimited segment.
pub fn host_segment(url: &str) -> Result<&str, WgetError> {
    match url.split('/').nth(2) {
        Some(host) if !host.is_empty() => Ok(host),
        _ => Err(WgetError::InvalidUrl(url.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal() {
        assert_eq!(filename_from_url("https://example.com/a/b/file.deb"), Some("file.deb"));
        assert_eq!(filename_from_url("https://example.com/single"), Some("single"));
    }

    #[test]
    fn root_or_empty() {
        assert_eq!(filename_from_url("https://example.com/"), None);
        assert_eq!(filename_from_url(""), None);
    }

    #[test]
    fn reserved_names() {
        assert_eq!(filename_from_url("https://example.com/."), None);
        assert_eq!(filename_from_url("https://example.com/.."), None);
    }

    #[test]
    fn host_is_third_segment() {
        assert_eq!(host_segment("http://example.com/file").unwrap(), "example.com");
        assert_eq!(host_segment("https://127.0.0.1:8080").unwrap(), "127.0.0.1:8080");
    }

    #[test]
    fn http_schemes_accepted() {
        assert!(require_http_scheme("http://example.com/f").is_ok());
        assert!(require_http_scheme("HTTPS://example.com/f").is_ok());
    }

    #[test]
    fn other_schemes_rejected() {
        for url in ["file:///etc/passwd", "ftp://h/f", "scp://h/f", "example.com/f", ""] {
            assert!(
                matches!(require_http_scheme(url), Err(WgetError::UnsupportedScheme { .. })),
                "{url:?} should be rejected"
            );
        }
    }

    #[test]
    fn host_missing_is_invalid_url() {
        assert!(matches!(host_segment("example.com"), Err(WgetError::InvalidUrl(_))));
        assert!(matches!(host_segment("http:/x"), Err(WgetError::InvalidUrl(_))));
    }
}
