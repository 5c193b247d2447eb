//! Country-specific holiday definitions.

/// Turkey.
pub mod turkey;
