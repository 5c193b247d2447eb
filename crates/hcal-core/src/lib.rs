//! # hcal-core
//!
//! Core building blocks shared across the holiday-features workspace: the
//! error hierarchy with its `ensure!` macro, the ordered
//! `TimeSeries` container used for daily indicator columns, and small
//! parsing utilities.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Generic time-series container.
pub mod time_series;

/// Miscellaneous utilities.
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use time_series::TimeSeries;
