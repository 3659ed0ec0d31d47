//! Deadline window calculator.
//!
//! A project type defines a duration range in months. The legal range for a
//! completion deadline is derived from that range plus a fixed one-month
//! administrative buffer on the upper bound. All arithmetic is calendar-month
//! based (`chrono::Months`, which clamps at end-of-month) and all comparisons
//! happen at day granularity in a single reference zone (UTC).

use chrono::Months;

use crate::error::CoreError;
use crate::types::Date;

/// Fixed administrative buffer added past the maximum estimated duration.
pub const ADMIN_BUFFER_MONTHS: u32 = 1;

/// Inclusive legal range for a completion deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineWindow {
    pub min: Date,
    pub max: Date,
}

/// Compute the deadline window for a newly requested project.
///
/// `anchor` is the application's creation date (which equals "today" at
/// submission time). The window is
/// `[anchor + min_months, anchor + max_months + 1 month]`.
pub fn window_for_new(anchor: Date, min_months: u32, max_months: u32) -> DeadlineWindow {
    DeadlineWindow {
        min: anchor + Months::new(min_months),
        max: anchor + Months::new(max_months + ADMIN_BUFFER_MONTHS),
    }
}

/// Compute the deadline window for editing an already-chosen deadline.
///
/// The window re-anchors to the previously chosen deadline: edits may push
/// the deadline forward by at most one month and never backward past the
/// original commitment. This rolling one-month buffer is intentional
/// business policy, not a reuse of the creation-time formula.
pub fn window_for_edit(previous_deadline: Date) -> DeadlineWindow {
    DeadlineWindow {
        min: previous_deadline,
        max: previous_deadline + Months::new(ADMIN_BUFFER_MONTHS),
    }
}

/// Validate that `deadline` falls inside `window` (inclusive on both ends).
pub fn validate_deadline(deadline: Date, window: &DeadlineWindow) -> Result<(), CoreError> {
    if deadline < window.min || deadline > window.max {
        return Err(CoreError::BusinessRule(format!(
            "deadline {deadline} is outside the allowed window [{}, {}]",
            window.min, window.max
        )));
    }
    Ok(())
}
