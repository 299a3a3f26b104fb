//! Epoch-millisecond rendering.
//!
//! All timestamps are rendered in UTC so the output does not depend on the
//! host's local time zone.

use chrono::{DateTime, Utc};

/// `YYYY/MM/DD HH:MM:SS`
pub const TIME_LAYOUT: &str = "%Y/%m/%d %H:%M:%S";

/// Convert milliseconds since the Unix epoch into a UTC datetime.
///
/// Returns `None` when the value falls outside the range chrono can represent.
pub fn epoch_millis_to_utc(epoch_millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(epoch_millis)
}

/// Render `epoch_millis` using [`TIME_LAYOUT`].
///
/// Sub-second precision is truncated. Returns `None` for unrepresentable
/// values; the parser rejects those epochs so a parsed reading always formats.
pub fn format_epoch(epoch_millis: i64) -> Option<String> {
    epoch_millis_to_utc(epoch_millis).map(|t| t.format(TIME_LAYOUT).to_string())
}
