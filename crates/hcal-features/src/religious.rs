//! Religious holiday features.
//!
//! Turns the sparse `(date, name)` events of a provider into a dense daily
//! table with three indicator columns:
//!
//! * `Ramadan Feast`: the start day of Eid al-Fitr and the days after it,
//!   one block per year;
//! * `Sacrifice Feast`: likewise for Eid al-Adha;
//! * `Fasting`: the days immediately before each year's Ramadan Feast.
//!
//! Construction runs in fixed steps: filter → group by date → one-hot
//! encode by exact name → collapse each observance family into one column →
//! expand each year's block from its start day → derive the fasting window.
//! Every year's start day is read from the collapsed columns before any
//! expansion, so a block that runs past December 31 never becomes the next
//! year's start day.  Block and window days are located by date arithmetic
//! from the start day, never by row position.

use std::collections::{BTreeMap, BTreeSet};

use hcal_core::errors::{Error, Result};
use hcal_time::{Date, DateRange};
use log::{debug, info, warn};

use crate::classifier::{EventClassifier, Observance};
use crate::config::{FastingWindow, FeatureConfig};
use crate::provider::HolidayEvent;
use crate::table::DailyTable;

/// Name of the derived fasting column.
pub const FASTING_COLUMN: &str = "Fasting";

/// Builds the religious half of the feature table.
#[derive(Debug)]
pub struct ReligiousFeatureBuilder<'a> {
    classifier: &'a dyn EventClassifier,
    config: &'a FeatureConfig,
}

impl<'a> ReligiousFeatureBuilder<'a> {
    /// Create a builder.
    pub fn new(classifier: &'a dyn EventClassifier, config: &'a FeatureConfig) -> Self {
        Self { classifier, config }
    }

    /// Build the `Ramadan Feast` / `Sacrifice Feast` / `Fasting` table from
    /// raw provider events.
    ///
    /// `provider` only names the source in diagnostics.
    ///
    /// # Errors
    /// * [`Error::NoMatchingEvents`] if no event is recognised at all;
    /// * [`Error::MissingAnchor`] if some year has no start day for an
    ///   observance.
    pub fn build(&self, provider: &str, events: &[HolidayEvent]) -> Result<DailyTable> {
        let range = self.config.date_range()?;

        let matched = filter_events(self.classifier, events);
        if matched.is_empty() {
            return Err(Error::NoMatchingEvents {
                provider: provider.to_string(),
            });
        }
        info!(
            "religious features: {} of {} events from '{provider}' recognised",
            matched.len(),
            events.len()
        );

        let grouped = group_by_date(matched.iter().copied());
        let mut table = one_hot(&grouped, range)?;
        debug!(
            "one-hot table shape {:?}, columns {:?}",
            table.shape(),
            table.column_names()
        );

        for obs in Observance::ALL {
            collapse(&mut table, self.classifier, obs)?;
        }
        let (ramadan, sacrifice) = (Observance::RamadanFeast, Observance::SacrificeFeast);
        let ramadan_anchors = find_anchors(&table, ramadan.column_name())?;
        let sacrifice_anchors = find_anchors(&table, sacrifice.column_name())?;
        expand_window(&mut table, ramadan, &ramadan_anchors, self.config.feast_days(ramadan))?;
        expand_window(
            &mut table,
            sacrifice,
            &sacrifice_anchors,
            self.config.feast_days(sacrifice),
        )?;
        derive_fasting(&mut table, &ramadan_anchors, &self.config.fasting)?;

        debug!(
            "religious table shape {:?}, columns {:?}",
            table.shape(),
            table.column_names()
        );
        Ok(table)
    }
}

/// Keep only the events the classifier recognises.
pub fn filter_events<'e>(
    classifier: &dyn EventClassifier,
    events: &'e [HolidayEvent],
) -> Vec<&'e HolidayEvent> {
    events
        .iter()
        .filter(|e| classifier.classify(&e.name).is_some())
        .collect()
}

/// Group events by day: each date maps to the ordered set of names it
/// carries.
pub fn group_by_date<'e>(
    events: impl IntoIterator<Item = &'e HolidayEvent>,
) -> BTreeMap<Date, BTreeSet<String>> {
    events.into_iter().fold(BTreeMap::new(), |mut acc, e| {
        acc.entry(e.date)
            .or_insert_with(BTreeSet::new)
            .insert(e.name.clone());
        acc
    })
}

/// One column per distinct exact name, dense over `range`.
///
/// Dates outside `range` are dropped.  Columns are ordered by name.
pub fn one_hot(grouped: &BTreeMap<Date, BTreeSet<String>>, range: DateRange) -> Result<DailyTable> {
    let names: BTreeSet<&str> = grouped
        .values()
        .flat_map(|names| names.iter().map(String::as_str))
        .collect();

    let mut table = DailyTable::new(range);
    for name in &names {
        table.add_zero_column(*name)?;
    }

    let mut dropped = 0usize;
    for (date, day_names) in grouped {
        if !range.contains(*date) {
            dropped += 1;
            continue;
        }
        for name in day_names {
            if let Some(col) = table.column_mut(name) {
                col.set(*date, 1);
            }
        }
    }
    if dropped > 0 {
        debug!("{dropped} event dates outside {range} dropped");
    }
    Ok(table)
}

/// Replace every one-hot column belonging to `observance` by a single
/// column named after it (row-wise logical OR).
pub fn collapse(
    table: &mut DailyTable,
    classifier: &dyn EventClassifier,
    observance: Observance,
) -> Result<()> {
    let n = table.collapse_columns(observance.column_name(), |name| {
        classifier.classify(name) == Some(observance)
    })?;
    debug!("collapsed {n} column(s) into '{observance}'");
    Ok(())
}

/// The first flagged day of `column` within `year`.
///
/// # Errors
/// Returns [`Error::MissingAnchor`] if the year has no flagged day.
pub fn find_anchor(table: &DailyTable, column: &str, year: u16) -> Result<Date> {
    let missing = || Error::MissingAnchor {
        observance: column.to_string(),
        year,
    };
    let days = table.range().within_year(year).ok_or_else(missing)?;
    table
        .column(column)
        .and_then(|c| c.first_flagged_in(days))
        .ok_or_else(missing)
}

/// The anchor of `column` in every year of the table, keyed by year.
///
/// # Errors
/// Returns [`Error::MissingAnchor`] for the first year without a flagged day.
pub fn find_anchors(table: &DailyTable, column: &str) -> Result<BTreeMap<u16, Date>> {
    table
        .range()
        .year_span()
        .map(|year| -> Result<(u16, Date)> { Ok((year, find_anchor(table, column, year)?)) })
        .collect()
}

/// Flag `days` days of `observance` from each anchor onwards.
///
/// `anchors` must come from the table before any expansion.
pub fn expand_window(
    table: &mut DailyTable,
    observance: Observance,
    anchors: &BTreeMap<u16, Date>,
    days: u32,
) -> Result<()> {
    let name = observance.column_name();
    let len = window_len(name, days)?;
    let mut block = Vec::new();
    for anchor in anchors.values() {
        for k in 1..len {
            block.push(anchor.add_days(k)?);
        }
    }
    flag_dates(table, name, &block)
}

/// Add the `Fasting` column: for each year, the days immediately before that
/// year's Ramadan Feast anchor.
pub fn derive_fasting(
    table: &mut DailyTable,
    ramadan_anchors: &BTreeMap<u16, Date>,
    window: &FastingWindow,
) -> Result<()> {
    let mut windows = Vec::new();
    for (&year, anchor) in ramadan_anchors {
        let days = window_len(FASTING_COLUMN, window.days_for(year))?;
        for k in 1..=days {
            windows.push(anchor.add_days(-k)?);
        }
        debug!("{year}: fasting {days} days before {anchor}");
    }

    table.add_zero_column(FASTING_COLUMN)?;
    flag_dates(table, FASTING_COLUMN, &windows)
}

fn window_len(column: &str, days: u32) -> Result<i32> {
    i32::try_from(days)
        .map_err(|_| Error::InvalidArgument(format!("'{column}' window of {days} days")))
}

fn flag_dates(table: &mut DailyTable, column: &str, dates: &[Date]) -> Result<()> {
    let range = table.range();
    let col = table
        .column_mut(column)
        .ok_or_else(|| Error::InvalidArgument(format!("no column '{column}'")))?;
    for &d in dates {
        if !col.set(d, 1) {
            warn!("'{column}' day {d} lies outside {range}, skipped");
        }
    }
    Ok(())
}
