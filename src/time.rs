//! Display formatting for account timestamps.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Zone timestamps are shown in unless configured otherwise.
pub const DEFAULT_DISPLAY_TZ: Tz = chrono_tz::America::Toronto;

/// Render a UTC instant in `tz`, e.g. `April 01, 2022, 12:00:00 AM`.
pub fn format_timestamp(instant: &DateTime<Utc>, tz: Tz) -> String {
    instant
        .with_timezone(&tz)
        .format("%B %d, %Y, %I:%M:%S %p")
        .to_string()
}
