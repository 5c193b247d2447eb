//! Holiday-event providers.
//!
//! A [`HolidayProvider`] supplies raw `(date, name)` holiday events for a
//! span of years.  Religious holiday dates follow the lunar calendar; this
//! crate never computes them, it only consumes what a provider returns.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use hcal_core::errors::{Error, Result};
use hcal_time::{Date, Turkey};

/// A single named holiday on a single day.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HolidayEvent {
    /// The day the holiday falls on.
    pub date: Date,
    /// Free-text label, possibly carrying qualifiers such as `"(estimated)"`.
    pub name: String,
}

impl HolidayEvent {
    /// Create an event.
    pub fn new(date: Date, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
        }
    }
}

/// Source of holiday events for a country.
pub trait HolidayProvider: std::fmt::Debug {
    /// Human-readable name, used in diagnostics.
    fn name(&self) -> &str;

    /// All events whose date falls in one of `years`.
    ///
    /// Each `(date, name)` pair appears at most once; a date may carry
    /// several names.
    fn events(&self, years: RangeInclusive<u16>) -> Result<Vec<HolidayEvent>>;
}

// ── In-memory provider ────────────────────────────────────────────────────────

/// A provider backed by an explicit list of events.
#[derive(Debug, Clone, Default)]
pub struct EventList {
    name: String,
    events: BTreeSet<HolidayEvent>,
}

impl EventList {
    /// Create an empty list.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            events: BTreeSet::new(),
        }
    }

    /// Add an event.  Adding the same `(date, name)` twice has no effect.
    pub fn add(&mut self, date: Date, name: impl Into<String>) {
        self.events.insert(HolidayEvent::new(date, name));
    }

    /// Builder-style [`add`](Self::add).
    pub fn with(mut self, date: Date, name: impl Into<String>) -> Self {
        self.add(date, name);
        self
    }

    /// Build from `("YYYY-MM-DD", name)` pairs.
    pub fn from_iso_pairs<'a>(
        name: impl Into<String>,
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self> {
        let mut list = Self::new(name);
        for (date, label) in pairs {
            list.add(date.parse()?, label);
        }
        Ok(list)
    }

    /// Number of stored events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the list holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl HolidayProvider for EventList {
    fn name(&self) -> &str {
        &self.name
    }

    fn events(&self, years: RangeInclusive<u16>) -> Result<Vec<HolidayEvent>> {
        Ok(self
            .events
            .iter()
            .filter(|e| years.contains(&e.date.year()))
            .cloned()
            .collect())
    }
}

// ── Bundled Turkey data ───────────────────────────────────────────────────────

/// `(year, Ramadan Feast start (month, day), Sacrifice Feast start (month, day),
/// officially confirmed)` as announced by the Presidency of Religious Affairs.
const TURKEY_FEASTS: [(u16, (u8, u8), (u8, u8), bool); 10] = [
    (2022, (5, 2), (7, 9), true),
    (2023, (4, 21), (6, 28), true),
    (2024, (4, 10), (6, 16), true),
    (2025, (3, 30), (6, 6), true),
    (2026, (3, 20), (5, 27), true),
    (2027, (3, 9), (5, 16), false),
    (2028, (2, 26), (5, 5), false),
    (2029, (2, 14), (4, 24), false),
    (2030, (2, 4), (4, 13), false),
    (2031, (1, 24), (4, 2), false),
];

/// Secular holiday labels as public-holiday data sets spell them.  These
/// differ slightly from the output column names.
const TURKEY_SECULAR_LABELS: [&str; 7] = [
    "New Year's Day",
    "National Sovereignty and Children's Day",
    "Labour and Solidarity Day",
    "Commemoration of Atatürk, Youth and Sports Day",
    "Democracy and National Unity Day",
    "Victory Day",
    "Republic Day",
];

/// Official Turkish public holidays for 2022–2031.
///
/// Each feast contributes one event per day: the first day is labelled
/// `"Ramadan Feast"` / `"Sacrifice Feast"`, the following days
/// `"... Holiday"`.  Years whose dates are not yet confirmed carry an
/// `" (estimated)"` suffix.
#[derive(Debug, Clone, Copy, Default)]
pub struct TurkeyPublicHolidays;

impl TurkeyPublicHolidays {
    /// Years covered by the bundled data.
    pub fn supported_years(&self) -> RangeInclusive<u16> {
        TURKEY_FEASTS[0].0..=TURKEY_FEASTS[TURKEY_FEASTS.len() - 1].0
    }

    fn feast_events(
        out: &mut Vec<HolidayEvent>,
        start: Date,
        days: i32,
        label: &str,
        suffix: &str,
    ) -> Result<()> {
        out.push(HolidayEvent::new(start, format!("{label}{suffix}")));
        for k in 1..days {
            out.push(HolidayEvent::new(
                start.add_days(k)?,
                format!("{label} Holiday{suffix}"),
            ));
        }
        Ok(())
    }
}

impl HolidayProvider for TurkeyPublicHolidays {
    fn name(&self) -> &str {
        "Turkey public holidays"
    }

    fn events(&self, years: RangeInclusive<u16>) -> Result<Vec<HolidayEvent>> {
        let supported = self.supported_years();
        if !supported.contains(years.start()) || !supported.contains(years.end()) {
            return Err(Error::Provider(format!(
                "no Turkey holiday data for {}..={} (available: {}..={})",
                years.start(),
                years.end(),
                supported.start(),
                supported.end()
            )));
        }

        let mut out = Vec::new();
        for &(year, (rm, rd), (sm, sd), confirmed) in TURKEY_FEASTS.iter() {
            if !years.contains(&year) {
                continue;
            }
            for (holiday, label) in Turkey.fixed_holidays().iter().zip(TURKEY_SECULAR_LABELS) {
                if let Some(d) = holiday.in_year(year) {
                    out.push(HolidayEvent::new(d, label));
                }
            }
            let suffix = if confirmed { "" } else { " (estimated)" };
            Self::feast_events(&mut out, Date::from_ymd(year, rm, rd)?, 3, "Ramadan Feast", suffix)?;
            Self::feast_events(&mut out, Date::from_ymd(year, sm, sd)?, 4, "Sacrifice Feast", suffix)?;
        }
        out.sort();
        out.dedup();
        Ok(out)
    }
}
