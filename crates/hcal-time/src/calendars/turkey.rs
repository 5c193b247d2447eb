//! Turkey calendar.

use crate::holiday::FixedHoliday;

/// The fixed-date secular public holidays of Turkey, in calendar order.
const FIXED_HOLIDAYS: [FixedHoliday; 7] = [
    FixedHoliday::new("New Year's Day", 1, 1),
    FixedHoliday::new("National Sovereignty and Children's Day", 4, 23),
    FixedHoliday::new("Labour Day", 5, 1),
    // Commemoration of Atatürk, Youth & Sports Day
    FixedHoliday::new("Youth and Sports Day", 5, 19),
    FixedHoliday::since("Democracy and National Unity Day", 7, 15, 2017),
    FixedHoliday::new("Victory Day", 8, 30),
    FixedHoliday::new("Republic Day", 10, 29),
];

/// Turkey calendar.
///
/// The following fixed holidays are observed:
/// * New Year's Day (Jan 1)
/// * National Sovereignty and Children's Day (Apr 23)
/// * Labour Day (May 1)
/// * Commemoration of Atatürk, Youth & Sports Day (May 19)
/// * Democracy and National Unity Day (Jul 15, since 2017)
/// * Victory Day (Aug 30)
/// * Republic Day (Oct 29)
///
/// Note: Ramadan Feast (Eid al-Fitr) and Sacrifice Feast (Eid al-Adha) vary
/// yearly based on the Islamic calendar and are not included here; they come
/// from a holiday-event provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct Turkey;

impl Turkey {
    /// The fixed secular holidays, in calendar order.
    pub fn fixed_holidays(&self) -> &'static [FixedHoliday] {
        &FIXED_HOLIDAYS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::Date;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn holiday_on(d: Date) -> Option<&'static str> {
        Turkey
            .fixed_holidays()
            .iter()
            .find(|h| h.in_year(d.year()) == Some(d))
            .map(|h| h.name)
    }

    #[test]
    fn seven_distinct_days() {
        let days: std::collections::HashSet<_> = Turkey
            .fixed_holidays()
            .iter()
            .map(|h| (h.month, h.day))
            .collect();
        assert_eq!(days.len(), 7);
    }

    #[test]
    fn new_years_day() {
        assert_eq!(holiday_on(date(2023, 1, 1)), Some("New Year's Day"));
    }

    #[test]
    fn national_sovereignty_day() {
        assert_eq!(
            holiday_on(date(2023, 4, 23)),
            Some("National Sovereignty and Children's Day")
        );
    }

    #[test]
    fn democracy_day_since_2017() {
        assert!(holiday_on(date(2024, 7, 15)).is_some());
        assert!(holiday_on(date(2016, 7, 15)).is_none());
    }

    #[test]
    fn republic_day() {
        assert_eq!(holiday_on(date(2023, 10, 29)), Some("Republic Day"));
    }

    #[test]
    fn ordinary_day() {
        assert!(holiday_on(date(2023, 6, 15)).is_none());
    }
}
