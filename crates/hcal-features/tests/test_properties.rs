//! Property tests: block and window invariants for arbitrary feast dates.

use hcal_features::{EventList, FeatureConfig, HolidayFeaturePipeline, FASTING_COLUMN};
use hcal_time::Date;
use proptest::prelude::*;

const FIRST_YEAR: u16 = 2022;

fn shift(d: Date, days: i32) -> Date {
    d.add_days(days).unwrap()
}
const YEARS: usize = 10;

/// Per year: Ramadan Feast day-of-year offset and days until Sacrifice Feast.
fn anchors() -> impl Strategy<Value = Vec<(i32, i32)>> {
    prop::collection::vec((40i32..250, 60i32..80), YEARS)
}

fn provider(anchors: &[(i32, i32)]) -> (EventList, Vec<(Date, Date)>) {
    let mut list = EventList::new("generated");
    let mut days = Vec::new();
    for (i, &(offset, gap)) in anchors.iter().enumerate() {
        let year = FIRST_YEAR + i as u16;
        let ramadan = shift(Date::from_ymd(year, 1, 1).unwrap(), offset);
        let sacrifice = shift(ramadan, gap);
        list.add(ramadan, "Ramadan Feast (estimated)");
        list.add(sacrifice, "Sacrifice Feast");
        days.push((ramadan, sacrifice));
    }
    (list, days)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn blocks_follow_anchors(a in anchors()) {
        let (list, days) = provider(&a);
        let t = HolidayFeaturePipeline::new(&list).run().unwrap();

        let ramadan = t.column("Ramadan Feast").unwrap();
        let sacrifice = t.column("Sacrifice Feast").unwrap();
        let fasting = t.column(FASTING_COLUMN).unwrap();
        prop_assert_eq!(ramadan.count_ones(), 3 * YEARS);
        prop_assert_eq!(sacrifice.count_ones(), 4 * YEARS);
        prop_assert_eq!(fasting.count_ones(), 30 * (YEARS - 1) + 29);

        for (i, &(r, s)) in days.iter().enumerate() {
            let year = FIRST_YEAR + i as u16;
            let len = FeatureConfig::default().fasting.days_for(year) as i32;
            for k in 0..3 {
                prop_assert_eq!(ramadan.get(shift(r, k)), Some(1));
            }
            prop_assert_eq!(ramadan.get(shift(r, 3)), Some(0));
            prop_assert_eq!(ramadan.get(shift(r, -1)), Some(0));
            for k in 0..4 {
                prop_assert_eq!(sacrifice.get(shift(s, k)), Some(1));
            }
            prop_assert_eq!(sacrifice.get(shift(s, 4)), Some(0));
            for k in 1..=len {
                prop_assert_eq!(fasting.get(shift(r, -k)), Some(1));
            }
            prop_assert_eq!(fasting.get(shift(r, -len - 1)), Some(0));
            prop_assert_eq!(fasting.get(r), Some(0));
        }
    }

    #[test]
    fn pipeline_is_deterministic(a in anchors()) {
        let (list, _) = provider(&a);
        let first = HolidayFeaturePipeline::new(&list).run().unwrap();
        let second = HolidayFeaturePipeline::new(&list).run().unwrap();
        prop_assert_eq!(first, second);
    }
}
