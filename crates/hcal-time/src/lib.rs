//! # hcal-time
//!
//! Date, date-range, and fixed-holiday types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Country-specific holiday definitions.
pub mod calendars;

/// `Date` type.
pub mod date;

/// `DateRange`: an inclusive, gap-free span of days.
pub mod date_range;

/// `FixedHoliday`: a holiday on the same calendar day every year.
pub mod holiday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendars::turkey::Turkey;
pub use date::Date;
pub use date_range::{DateRange, DateRangeIter};
pub use holiday::FixedHoliday;
