//! Recognising religious observances by event name.
//!
//! Providers label events with free text (`"Ramadan Feast"`,
//! `"Ramadan Feast Holiday"`, `"Sacrifice Feast (estimated)"`, ...).  An
//! [`EventClassifier`] maps such a label to the [`Observance`] family it
//! belongs to, so the feature builders never compare names themselves.

/// A religious observance tracked as a multi-day indicator column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Observance {
    /// Eid al-Fitr, at the end of Ramadan.
    RamadanFeast,
    /// Eid al-Adha.
    SacrificeFeast,
}

impl Observance {
    /// All observances, in output column order.
    pub const ALL: [Observance; 2] = [Observance::RamadanFeast, Observance::SacrificeFeast];

    /// Name of the collapsed indicator column.
    pub fn column_name(&self) -> &'static str {
        match self {
            Observance::RamadanFeast => "Ramadan Feast",
            Observance::SacrificeFeast => "Sacrifice Feast",
        }
    }
}

impl std::fmt::Display for Observance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column_name())
    }
}

/// Decides which observance family, if any, an event name belongs to.
pub trait EventClassifier: std::fmt::Debug {
    /// The observance `name` belongs to, or `None` for unrelated events.
    fn classify(&self, name: &str) -> Option<Observance>;
}

/// Classifies names by substring containment.
///
/// Patterns are tried in registration order; the first match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstringClassifier {
    patterns: Vec<(String, Observance)>,
}

impl Default for SubstringClassifier {
    /// Matches the English names used by public-holiday data sets.
    fn default() -> Self {
        Self::empty()
            .with_pattern(Observance::RamadanFeast.column_name(), Observance::RamadanFeast)
            .with_pattern(
                Observance::SacrificeFeast.column_name(),
                Observance::SacrificeFeast,
            )
    }
}

impl SubstringClassifier {
    /// A classifier that recognises nothing.
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Also map names containing `pattern` to `observance`.
    pub fn with_pattern(mut self, pattern: impl Into<String>, observance: Observance) -> Self {
        self.patterns.push((pattern.into(), observance));
        self
    }
}

impl EventClassifier for SubstringClassifier {
    fn classify(&self, name: &str) -> Option<Observance> {
        self.patterns
            .iter()
            .find(|(p, _)| name.contains(p.as_str()))
            .map(|(_, obs)| *obs)
    }
}
