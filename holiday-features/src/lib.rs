//! # holiday-features
//!
//! Daily holiday indicator tables for Turkey, 2022–2031.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `hcal-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use holiday_features::features::turkey_holiday_table;
//!
//! let table = turkey_holiday_table().unwrap();
//! assert_eq!(table.date_column(), "ds");
//! assert_eq!(table.columns().len(), 10);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core error definitions and containers.
pub use hcal_core as core;

/// Date, date-range, and fixed-holiday types.
pub use hcal_time as time;

/// Holiday providers, feature builders, pipeline, and export.
pub use hcal_features as features;
