//! Pipeline configuration.
//!
//! [`FeatureConfig`] fixes the covered years, the name of the output date
//! column, the length of each feast block and the fasting window.  The
//! defaults reproduce the 2022–2031 Turkey table.

use std::collections::BTreeMap;

use hcal_core::ensure;
use hcal_core::errors::Result;
use hcal_time::DateRange;

use crate::classifier::Observance;

/// Upper bound on any feast block or fasting window, in days.
pub const MAX_WINDOW_DAYS: u32 = 366;

/// Length of the fasting window that precedes each year's Ramadan Feast.
///
/// The window is `default_days` long except in years listed in `overrides`.
/// The default table shortens 2023 to 29 days; that year's Ramadan month had
/// 29 days.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FastingWindow {
    /// Window length in days for years without an override.
    pub default_days: u32,
    /// Per-year window lengths.
    pub overrides: BTreeMap<u16, u32>,
}

impl Default for FastingWindow {
    fn default() -> Self {
        Self {
            default_days: 30,
            overrides: BTreeMap::from([(2023, 29)]),
        }
    }
}

impl FastingWindow {
    /// A window of the same length in every year.
    pub fn uniform(days: u32) -> Self {
        Self {
            default_days: days,
            overrides: BTreeMap::new(),
        }
    }

    /// Use `days` as the window length in `year`.
    pub fn with_override(mut self, year: u16, days: u32) -> Self {
        self.overrides.insert(year, days);
        self
    }

    /// Window length in `year`.
    pub fn days_for(&self, year: u16) -> u32 {
        self.overrides
            .get(&year)
            .copied()
            .unwrap_or(self.default_days)
    }
}

/// Configuration of the holiday feature pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureConfig {
    /// First covered year.
    pub start_year: u16,
    /// Last covered year (inclusive).
    pub end_year: u16,
    /// Name of the date column in the merged output.
    pub date_column: String,
    /// Length of the Ramadan Feast block in days, start day included.
    pub ramadan_feast_days: u32,
    /// Length of the Sacrifice Feast block in days, start day included.
    pub sacrifice_feast_days: u32,
    /// Fasting window before the Ramadan Feast.
    pub fasting: FastingWindow,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            start_year: 2022,
            end_year: 2031,
            date_column: "ds".to_string(),
            ramadan_feast_days: 3,
            sacrifice_feast_days: 4,
            fasting: FastingWindow::default(),
        }
    }
}

impl FeatureConfig {
    /// Cover `start_year..=end_year`.
    pub fn with_years(mut self, start_year: u16, end_year: u16) -> Self {
        self.start_year = start_year;
        self.end_year = end_year;
        self
    }

    /// Name the output date column.
    pub fn with_date_column(mut self, name: impl Into<String>) -> Self {
        self.date_column = name.into();
        self
    }

    /// Set the block length of `observance`.
    pub fn with_feast_days(mut self, observance: Observance, days: u32) -> Self {
        match observance {
            Observance::RamadanFeast => self.ramadan_feast_days = days,
            Observance::SacrificeFeast => self.sacrifice_feast_days = days,
        }
        self
    }

    /// Replace the fasting window.
    pub fn with_fasting(mut self, fasting: FastingWindow) -> Self {
        self.fasting = fasting;
        self
    }

    /// Block length of `observance` in days.
    pub fn feast_days(&self, observance: Observance) -> u32 {
        match observance {
            Observance::RamadanFeast => self.ramadan_feast_days,
            Observance::SacrificeFeast => self.sacrifice_feast_days,
        }
    }

    /// The dense date range covered by the output table.
    pub fn date_range(&self) -> Result<DateRange> {
        DateRange::years(self.start_year, self.end_year)
    }

    /// Check the configuration for internal consistency.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.start_year <= self.end_year,
            "start year {} is after end year {}",
            self.start_year,
            self.end_year
        );
        ensure!(
            !self.date_column.trim().is_empty(),
            "date column name must not be empty"
        );
        for obs in Observance::ALL {
            let days = self.feast_days(obs);
            ensure!(
                (1..=MAX_WINDOW_DAYS).contains(&days),
                "'{}' must last 1 to {MAX_WINDOW_DAYS} days, got {days}",
                obs.column_name()
            );
        }
        let longest = self
            .fasting
            .overrides
            .values()
            .copied()
            .fold(self.fasting.default_days, u32::max);
        ensure!(
            longest <= MAX_WINDOW_DAYS,
            "fasting window must not exceed {MAX_WINDOW_DAYS} days, got {longest}"
        );
        self.date_range().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hcal_core::Error;

    #[test]
    fn defaults_match_turkey_table() {
        let cfg = FeatureConfig::default();
        assert_eq!((cfg.start_year, cfg.end_year), (2022, 2031));
        assert_eq!(cfg.date_column, "ds");
        assert_eq!(cfg.feast_days(Observance::RamadanFeast), 3);
        assert_eq!(cfg.feast_days(Observance::SacrificeFeast), 4);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn fasting_override_for_2023() {
        let w = FastingWindow::default();
        assert_eq!(w.days_for(2022), 30);
        assert_eq!(w.days_for(2023), 29);
        assert_eq!(w.days_for(2024), 30);
        assert_eq!(FastingWindow::uniform(30).days_for(2023), 30);
    }

    #[test]
    fn invalid_configs_rejected() {
        assert!(FeatureConfig::default().with_years(2031, 2022).validate().is_err());
        assert!(FeatureConfig::default().with_date_column(" ").validate().is_err());
        assert!(FeatureConfig::default()
            .with_feast_days(Observance::SacrificeFeast, 0)
            .validate()
            .is_err());
        assert!(FeatureConfig::default().with_years(1800, 1801).validate().is_err());
    }

    #[test]
    fn oversized_windows_rejected() {
        let huge = FeatureConfig::default().with_feast_days(Observance::RamadanFeast, u32::MAX);
        assert!(matches!(huge.validate(), Err(Error::Precondition(_))));
        let fasting = FastingWindow::default().with_override(2024, u32::MAX);
        assert!(FeatureConfig::default().with_fasting(fasting).validate().is_err());
        let longest = FeatureConfig::default()
            .with_feast_days(Observance::SacrificeFeast, MAX_WINDOW_DAYS)
            .with_fasting(FastingWindow::uniform(MAX_WINDOW_DAYS));
        assert!(longest.validate().is_ok());
    }
}
