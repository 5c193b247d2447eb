//! Integration tests for `Date` and `DateRange`.

use hcal_time::date::{days_in_month, is_leap_year};
use hcal_time::{Date, DateRange, Turkey};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// The date with the given serial number (1 = 1900-01-01).
fn from_serial(serial: i32) -> Date {
    Date::MIN.add_days(serial - 1).unwrap()
}

// ─── Consistency ──────────────────────────────────────────────────────────────

#[test]
fn consistency() {
    // Walk every day from 1901 to 2199 and check that serials are consecutive
    // and the decomposed components advance correctly.
    let mut prev = date(1900, 12, 31);
    let range = DateRange::new(date(1901, 1, 1), Date::MAX).unwrap();
    for d in range {
        assert_eq!(d.serial(), prev.serial() + 1, "serial gap at {d}");
        let (py, pm, pd) = (prev.year(), prev.month(), prev.day_of_month());
        let (y, m, dd) = (d.year(), d.month(), d.day_of_month());
        let same_month = y == py && m == pm && dd == pd + 1;
        let next_month = y == py && m == pm + 1 && dd == 1 && pd == days_in_month(py, pm);
        let next_year = y == py + 1 && m == 1 && dd == 1 && pm == 12 && pd == 31;
        assert!(
            same_month || next_month || next_year,
            "wrong day after {prev}: {d}"
        );
        prev = d;
    }
}

#[test]
fn leap_years_in_forecast_horizon() {
    let leaps: Vec<u16> = (2022..=2031).filter(|&y| is_leap_year(y)).collect();
    assert_eq!(leaps, vec![2024, 2028]);
    let total: usize = (2022..=2031)
        .map(|y| if is_leap_year(y) { 366 } else { 365 })
        .sum();
    assert_eq!(DateRange::years(2022, 2031).unwrap().len(), total);
}

#[test]
fn year_slices_partition_range() {
    let range = DateRange::years(2022, 2031).unwrap();
    let mut covered = 0;
    for y in range.year_span() {
        let slice = range.within_year(y).unwrap();
        assert!(slice.iter().all(|d| d.year() == y));
        covered += slice.len();
    }
    assert_eq!(covered, range.len());
}

#[test]
fn turkey_fixed_holidays_once_per_year() {
    let range = DateRange::years(2022, 2031).unwrap();
    for h in Turkey.fixed_holidays() {
        let hits = range
            .iter()
            .filter(|&d| h.in_year(d.year()) == Some(d))
            .count();
        assert_eq!(hits, 10, "{} should occur once per year", h.name);
    }
}

// ─── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn iso_display_parses_back(serial in 1i32..=109_573) {
        let d = from_serial(serial);
        prop_assert_eq!(d.serial(), serial);
        let parsed: Date = d.to_string().parse().unwrap();
        prop_assert_eq!(parsed, d);
    }

    #[test]
    fn range_is_gap_free(start in 40_000i32..50_000, span in 0i32..800) {
        let s = from_serial(start);
        let e = from_serial(start + span);
        let r = DateRange::new(s, e).unwrap();
        let dates = r.dates();
        prop_assert_eq!(dates.len(), span as usize + 1);
        for w in dates.windows(2) {
            prop_assert_eq!(w[0].days_between(w[1]), 1);
        }
    }
}
