//! Miscellaneous utilities.

/// ISO date string parsing.
pub mod data_parsers;
