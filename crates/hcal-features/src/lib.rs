//! # hcal-features
//!
//! Daily holiday indicator tables for Turkey, for use as regressors in
//! time-series forecasting.
//!
//! The pipeline has three stages:
//!
//! 1. [`religious`]: densifies provider events for Ramadan Feast and
//!    Sacrifice Feast, collapses name variants, expands each year's block
//!    from its start day and derives the `Fasting` window;
//! 2. [`secular`]: one column per fixed-date secular holiday;
//! 3. [`merger`]: joins both on date.
//!
//! ```no_run
//! use hcal_features::{export, pipeline::turkey_holiday_table};
//!
//! let table = turkey_holiday_table()?;
//! export::write_csv_file(&table, "Turkey_official_and_religious_days.csv")?;
//! # Ok::<(), hcal_core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Mapping event names to observance families.
pub mod classifier;

/// Pipeline configuration.
pub mod config;

/// CSV export.
pub mod export;

/// Secular/religious table join.
pub mod merger;

/// End-to-end pipeline.
pub mod pipeline;

/// Holiday-event providers.
pub mod provider;

/// Religious holiday features.
pub mod religious;

/// Secular holiday features.
pub mod secular;

/// Dense daily indicator tables.
pub mod table;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use classifier::{EventClassifier, Observance, SubstringClassifier};
pub use config::{FastingWindow, FeatureConfig};
pub use pipeline::{turkey_holiday_table, HolidayFeaturePipeline};
pub use provider::{EventList, HolidayEvent, HolidayProvider, TurkeyPublicHolidays};
pub use religious::{ReligiousFeatureBuilder, FASTING_COLUMN};
pub use secular::build_secular_features;
pub use table::{DailyRow, DailyTable, IndicatorColumn};
