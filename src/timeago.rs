//! Relative-time formatting
//!
//! Maps an elapsed duration to a coarse human label ("just now",
//! "5m ago", "2h ago", ...) using fixed thresholds. No i18n, no
//! sub-minute precision.

use chrono::Utc;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;

/// Format an elapsed duration in seconds as a coarse label
pub fn format_elapsed(seconds: i64) -> String {
    if seconds < MINUTE {
        return "just now".to_string();
    }
    if seconds < HOUR {
        return format!("{}m ago", seconds / MINUTE);
    }
    if seconds < DAY {
        return format!("{}h ago", seconds / HOUR);
    }
    if seconds < WEEK {
        return format!("{}d ago", seconds / DAY);
    }
    if seconds < MONTH {
        return format!("{}w ago", seconds / WEEK);
    }
    format!("{}mo ago", seconds / MONTH)
}

/// Format an epoch-millisecond timestamp relative to the current clock
pub fn format_timestamp(timestamp_ms: i64) -> String {
    let elapsed = (Utc::now().timestamp_millis() - timestamp_ms) / 1000;
    format_elapsed(elapsed.max(0))
}
