//! Error types for holiday-features.
//!
//! Every failure in the feature pipeline is fatal: the table is either built
//! completely or not at all.  All crates in the workspace report through the
//! single [`Error`] enum defined here, and the `ensure!` macro gives a
//! compact way to reject bad inputs.

use thiserror::Error;

/// The top-level error type used throughout holiday-features.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error (construction, parsing, arithmetic).
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The holiday-event provider could not supply the requested data.
    #[error("holiday provider error: {0}")]
    Provider(String),

    /// A year has no start day for an observance, so its window cannot be
    /// derived.
    #[error("no '{observance}' start day found in {year}")]
    MissingAnchor {
        /// Name of the observance column (e.g. `"Ramadan Feast"`).
        observance: String,
        /// The offending year.
        year: u16,
    },

    /// No event returned by the provider was recognised as a religious
    /// observance.  Usually means the provider's naming changed.
    #[error("provider '{provider}' returned no recognised religious holiday events")]
    NoMatchingEvents {
        /// Name of the provider that was queried.
        provider: String,
    },

    /// Two daily tables disagree on their date coverage.
    #[error("date ranges differ: {left} vs {right}")]
    RangeMismatch {
        /// Description of the left-hand table's coverage.
        left: String,
        /// Description of the right-hand table's coverage.
        right: String,
    },

    /// Writing the output table failed.
    #[error("export failed: {0}")]
    Export(String),
}

/// Shorthand `Result` type used throughout holiday-features.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use hcal_core::{ensure, errors::Error};
/// fn positive(days: i32) -> hcal_core::errors::Result<i32> {
///     ensure!(days > 0, "days must be positive, got {days}");
///     Ok(days)
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(-1), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
