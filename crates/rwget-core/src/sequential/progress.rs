//! Progress state for the single-URL path.
//!
//! Tracks bytes written against the declared `Content-Length`; the percentage
//! is only as good as that header.

/// Running total for one transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressState {
    total: u64,
    declared: Option<u64>,
}

impl ProgressState {
    pub fn new(declared: Option<u64>) -> Self {
        Self { total: 0, declared }
    }

    pub fn advance(&mut self, bytes: usize) {
        self.total += bytes as u64;
    }

    /// Bytes written so far.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn declared(&self) -> Option<u64> {
        self.declared
    }

    /// True once the running total is strictly above `ceiling`.
    pub fn exceeds(&self, ceiling: u64) -> bool {
        self.total > ceiling
    }

    /// Whole percent of the declared length (truncated, may pass 100 if the
    /// server under-declared). None when the length is unknown or zero.
    pub fn percent(&self) -> Option<u64> {
        match self.declared {
            Some(d) if d > 0 => Some((self.total as f64 / d as f64 * 100.0) as u64),
            _ => None,
        }
    }

    /// `\r<name>  <pct>%`, overwriting the previous progress line.
    pub fn line(&self, name: &str) -> String {
        match self.percent() {
            Some(p) => format!("\r{}  {:>3}%", name, p),
            None => format!("\r{}  {:>3}%", name, "-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_truncates() {
        let mut p = ProgressState::new(Some(3));
        p.advance(1);
        assert_eq!(p.percent(), Some(33));
        p.advance(2);
        assert_eq!(p.percent(), Some(100));
    }

    #[test]
    fn percent_unknown_or_zero_length() {
        let mut p = ProgressState::new(None);
        p.advance(10);
        assert_eq!(p.percent(), None);
        assert_eq!(p.line("f"), "\rf    -%");
        assert_eq!(ProgressState::new(Some(0)).percent(), None);
    }

    #[test]
    fn line_is_right_aligned() {
        let mut p = ProgressState::new(Some(1024));
        p.advance(102);
        assert_eq!(p.line("file.bin"), "\rfile.bin    9%");
        p.advance(922);
        assert_eq!(p.line("file.bin"), "\rfile.bin  100%");
    }

    #[test]
    fn exceeds_is_strict() {
        let mut p = ProgressState::new(None);
        p.advance(1000);
        assert!(!p.exceeds(1000));
        p.advance(1);
        assert!(p.exceeds(1000));
    }

    #[test]
    fn over_declared_length_goes_past_100() {
        let mut p = ProgressState::new(Some(50));
        p.advance(100);
        assert_eq!(p.percent(), Some(200));
        assert_eq!(p.total(), 100);
        assert_eq!(p.declared(), Some(50));
    }
}
