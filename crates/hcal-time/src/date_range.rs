//! `DateRange`: an inclusive, gap-free span of calendar days.
//!
//! Daily feature tables are indexed by a `DateRange`: every calendar day
//! between `start` and `end` (both inclusive) appears exactly once, in
//! ascending order.

use crate::date::Date;
use hcal_core::errors::{Error, Result};

/// An inclusive range of consecutive calendar days.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    /// Create the range `[start, end]`.
    ///
    /// # Errors
    /// Returns an error if either bound is the null date or `start > end`.
    pub fn new(start: Date, end: Date) -> Result<Self> {
        if start.is_null() || end.is_null() {
            return Err(Error::InvalidArgument(
                "date range bounds must not be null".into(),
            ));
        }
        if start > end {
            return Err(Error::InvalidArgument(format!(
                "date range start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// The range covering January 1 of `first_year` through December 31 of
    /// `last_year`.
    pub fn years(first_year: u16, last_year: u16) -> Result<Self> {
        Self::new(
            Date::from_ymd(first_year, 1, 1)?,
            Date::from_ymd(last_year, 12, 31)?,
        )
    }

    /// First day of the range.
    pub fn start(&self) -> Date {
        self.start
    }

    /// Last day of the range.
    pub fn end(&self) -> Date {
        self.end
    }

    /// Number of days in the range.
    pub fn len(&self) -> usize {
        self.start.days_between(self.end) as usize + 1
    }

    /// A range always holds at least one day.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `date` lies within the range.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// The calendar years touched by the range, in ascending order.
    pub fn year_span(&self) -> std::ops::RangeInclusive<u16> {
        self.start.year()..=self.end.year()
    }

    /// The part of this range that falls in `year`, or `None` if the range
    /// does not touch that year.
    pub fn within_year(&self, year: u16) -> Option<DateRange> {
        if !self.year_span().contains(&year) {
            return None;
        }
        let first = Date::from_ymd(year, 1, 1).ok()?.max(self.start);
        let last = Date::from_ymd(year, 12, 31).ok()?.min(self.end);
        Some(DateRange {
            start: first,
            end: last,
        })
    }

    /// Iterate over every day of the range in ascending order.
    pub fn iter(&self) -> DateRangeIter {
        DateRangeIter {
            next: self.start.serial(),
            last: self.end.serial(),
        }
    }

    /// All days of the range.
    pub fn dates(&self) -> Vec<Date> {
        self.iter().collect()
    }
}

impl std::fmt::Debug for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DateRange({}..={})", self.start, self.end)
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={} ({} days)", self.start, self.end, self.len())
    }
}

impl IntoIterator for DateRange {
    type Item = Date;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> DateRangeIter {
        self.iter()
    }
}

impl IntoIterator for &DateRange {
    type Item = Date;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> DateRangeIter {
        self.iter()
    }
}

/// Iterator over the days of a [`DateRange`].
#[derive(Debug, Clone)]
pub struct DateRangeIter {
    next: i32,
    last: i32,
}

impl Iterator for DateRangeIter {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        if self.next > self.last {
            return None;
        }
        let d = Date::from_serial_unchecked(self.next);
        self.next += 1;
        Some(d)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.last - self.next + 1).max(0) as usize;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for DateRangeIter {
    fn next_back(&mut self) -> Option<Date> {
        if self.next > self.last {
            return None;
        }
        let d = Date::from_serial_unchecked(self.last);
        self.last -= 1;
        Some(d)
    }
}

impl ExactSizeIterator for DateRangeIter {}
