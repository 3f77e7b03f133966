//! `--rate-limit` parsing.
//!
//! The value is a byte ceiling, not a throughput throttle: the sequential
//! downloader aborts once the running total exceeds it.

use crate::error::WgetError;

const KILO: u64 = 1_000;
const MEGA: u64 = 1_000_000;

/// Parses `<digits><unit>` where unit is `k`/`K` (×1000) or `m`/`M` (×1,000,000).
///
/// `"400k"` → 400000, `"2M"` → 2000000. Anything else is `InvalidRateLimit`.
pub fn parse_rate_limit(value: &str) -> Result<u64, WgetError> {
    let invalid = || WgetError::InvalidRateLimit {
        value: value.to_string(),
    };

    let mut chars = value.chars();
    let unit = chars.next_back().ok_or_else(invalid)?;
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let multiplier = match unit {
        'k' | 'K' => KILO,
        'm' | 'M' => MEGA,
        _ => return Err(invalid()),
    };
    let n: u64 = digits.parse().map_err(|_| invalid())?;
    n.checked_mul(multiplier).ok_or_else(invalid)
}
