//! Turning raw query strings into bounded request parameters.
//!
//! Bad input never fails a request. Anything that does not start with an
//! integer falls back to a default, and the result is then clamped to the
//! configured limits.

use crate::config::GenerationConfig;
use crate::constants::defaults;

/// Bounded parameters for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestParams {
    /// Number of top-level elements, always in `[1, max_array_size]`
    pub size: usize,
    /// Nesting bound; capped at `max_depth_limit` but never raised, so it may be
    /// zero or negative
    pub max_depth: i64,
}

impl RequestParams {
    /// Parse-or-default, then clamp.
    ///
    /// `size` is clamped on both ends. `max_depth` only has an upper bound; a
    /// value at or below zero makes every element a bare primitive.
    pub fn resolve(
        raw_size: Option<&str>,
        raw_max_depth: Option<&str>,
        config: &GenerationConfig,
    ) -> Self {
        let size = raw_size.and_then(parse_int_prefix).unwrap_or(defaults::REQUEST_SIZE);
        let max_depth =
            raw_max_depth.and_then(parse_int_prefix).unwrap_or(defaults::REQUEST_MAX_DEPTH);

        let max_array_size = i64::try_from(config.max_array_size()).unwrap_or(i64::MAX);
        let size = size.clamp(1, max_array_size);

        Self {
            size: usize::try_from(size).unwrap_or(1),
            max_depth: max_depth.min(i64::from(config.max_depth_limit())),
        }
    }
}

/// Read a leading base-10 integer the way a lenient `parseInt` does.
///
/// Leading whitespace and one sign are accepted, trailing characters are
/// ignored, and out-of-range values saturate. Returns `None` when no digit
/// follows the optional sign.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for digit in digits.bytes().map_while(|b| (b as char).to_digit(10)) {
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(i64::from(digit));
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}
