//! Date and time utility functions
//!
//! This module provides the clock abstraction used to stamp new tasks and the
//! helpers that turn a creation instant into a task id and a display string.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use std::fmt::Write;

/// Default format for task creation timestamps, e.g. `2:05 PM, 16/10/2026`
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%-I:%M %p, %d/%m/%Y";

/// Source of the current time
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Milliseconds since the Unix epoch, clamped at zero for pre-epoch instants
pub fn epoch_millis(instant: &DateTime<Local>) -> u64 {
    u64::try_from(instant.timestamp_millis()).unwrap_or(0)
}

/// Check that a strftime format string only contains valid specifiers
pub fn is_valid_format(format: &str) -> bool {
    !format.trim().is_empty() && !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Format a creation timestamp
///
/// Falls back to [`DEFAULT_TIMESTAMP_FORMAT`] when `format` cannot be rendered,
/// so a bad format never aborts task creation.
pub fn format_timestamp(instant: &DateTime<Local>, format: &str) -> String {
    let mut formatted = String::new();
    if is_valid_format(format) && write!(formatted, "{}", instant.format(format)).is_ok() {
        return formatted;
    }

    instant.format(DEFAULT_TIMESTAMP_FORMAT).to_string()
}
