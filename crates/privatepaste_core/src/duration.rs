//! Expiration strings such as `"1 months"` or `"1 days 30 minutes"`.

use crate::error::ExpirationError;
use regex::Regex;
use std::sync::OnceLock;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;
const MONTH: u64 = 30 * DAY;
const YEAR: u64 = 365 * DAY;

/// Expiration units and their length in seconds.
///
/// Lookups are exact and case-sensitive: `m` is a minute, `M` is a month.
pub const EXPIRATION_MODIFIERS: &[(&str, u64)] = &[
    ("s", 1),
    ("m", MINUTE),
    ("h", HOUR),
    ("d", DAY),
    ("w", WEEK),
    ("M", MONTH),
    ("y", YEAR),
    ("seconds", 1),
    ("minutes", MINUTE),
    ("hours", HOUR),
    ("days", DAY),
    ("weeks", WEEK),
    ("months", MONTH),
    ("years", YEAR),
];

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"([0-9]+) (\w+)").expect("static expiration pattern"))
}

/// Look up the length of an expiration unit in seconds.
///
/// # Returns
/// `None` when `unit` is not in [`EXPIRATION_MODIFIERS`].
pub fn expiration_modifier(unit: &str) -> Option<u64> {
    EXPIRATION_MODIFIERS
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, seconds)| *seconds)
}

/// Parse an expiration string into a number of seconds.
///
/// Every `<count> <unit>` token found in `expiration` is added to the total;
/// anything between tokens is ignored and repeated units simply accumulate.
/// A string without tokens parses to `0`.
///
/// # Errors
/// - [`ExpirationError::InvalidExpirationUnit`] on the first unknown unit.
/// - [`ExpirationError::ExpirationOverflow`] when a count or the running total
///   does not fit in a `u64`.
pub fn parse_duration(expiration: &str) -> Result<u64, ExpirationError> {
    let mut total: u64 = 0;
    for caps in token_pattern().captures_iter(expiration) {
        let token = &caps[0];
        let unit = &caps[2];
        let seconds = expiration_modifier(unit)
            .ok_or_else(|| ExpirationError::InvalidExpirationUnit(unit.to_string()))?;
        total = caps[1]
            .parse::<u64>()
            .ok()
            .and_then(|count| count.checked_mul(seconds))
            .and_then(|span| total.checked_add(span))
            .ok_or_else(|| ExpirationError::ExpirationOverflow(token.to_string()))?;
    }

    tracing::debug!(input = expiration, seconds = total, "Expiration string parsed");
    Ok(total)
}
