use std::time::SystemTime;

use chrono::{DateTime, Utc};

/// The timestamp layout used for modification times, matching the one git
/// prints in diff headers.
pub const MTIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f +0000";

/// Format a file's modification time as a fixed-width UTC timestamp with
/// microsecond precision.
#[must_use]
pub fn format_mtime(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).format(MTIME_FORMAT).to_string()
}
