//! Fixed-date holidays.
//!
//! A [`FixedHoliday`] falls on the same month and day every year, optionally
//! only from a given year onwards.

use crate::date::Date;

/// A holiday observed on the same calendar day every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedHoliday {
    /// Display name, also used as the indicator column name.
    pub name: &'static str,
    /// Month (1–12).
    pub month: u8,
    /// Day of the month (1–31).
    pub day: u8,
    /// First year in which the holiday is observed, if it was introduced
    /// later.
    pub since: Option<u16>,
}

impl FixedHoliday {
    /// A holiday observed every year on `month`/`day`.
    pub const fn new(name: &'static str, month: u8, day: u8) -> Self {
        Self {
            name,
            month,
            day,
            since: None,
        }
    }

    /// A holiday observed on `month`/`day` from `year` onwards.
    pub const fn since(name: &'static str, month: u8, day: u8, year: u16) -> Self {
        Self {
            name,
            month,
            day,
            since: Some(year),
        }
    }

    /// The date of the holiday in `year`, if it is observed that year.
    pub fn in_year(&self, year: u16) -> Option<Date> {
        if self.since.is_some_and(|y| year < y) {
            return None;
        }
        Date::from_ymd(year, self.month, self.day).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn matches_month_day_every_year() {
        let h = FixedHoliday::new("Victory Day", 8, 30);
        assert_eq!(h.in_year(2022), Some(date(2022, 8, 30)));
        assert_eq!(h.in_year(2031), Some(date(2031, 8, 30)));
    }

    #[test]
    fn feb_29_only_in_leap_years() {
        let h = FixedHoliday::new("Leap Day", 2, 29);
        assert_eq!(h.in_year(2024), Some(date(2024, 2, 29)));
        assert_eq!(h.in_year(2023), None);
    }

    #[test]
    fn respects_introduction_year() {
        let h = FixedHoliday::since("Democracy and National Unity Day", 7, 15, 2017);
        assert_eq!(h.in_year(2016), None);
        assert_eq!(h.in_year(2017), Some(date(2017, 7, 15)));
        assert_eq!(h.in_year(2024), Some(date(2024, 7, 15)));
    }
}
