//! Time helpers for tpkit
//!
//! Captures creation timestamps and renders them for display.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};

/// Current instant in UTC
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Check whether a strftime pattern parses cleanly
pub fn is_valid_pattern(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// Render a timestamp with a strftime pattern
///
/// Falls back to RFC 3339 when the pattern is invalid, since chrono's
/// formatter panics on bad items.
pub fn format_timestamp(ts: &DateTime<Utc>, pattern: &str) -> String {
    if is_valid_pattern(pattern) {
        ts.format_with_items(StrftimeItems::new(pattern)).to_string()
    } else {
        log::warn!("Invalid date format {:?}, using RFC 3339", pattern);
        ts.to_rfc3339()
    }
}
