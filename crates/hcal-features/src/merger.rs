//! Joining the secular and religious tables.

use hcal_core::errors::{Error, Result};
use log::info;

use crate::table::DailyTable;

/// Inner-join `left` and `right` on date and name the date column
/// `date_column`.
///
/// Both tables must cover exactly the same days, so the join is a 1:1 row
/// alignment; every copied column is checked against the shared range as it
/// is added.  Output columns are `left`'s followed by `right`'s.
///
/// # Errors
/// * [`Error::RangeMismatch`] if the date coverage differs;
/// * [`Error::InvalidArgument`] if both tables have a column of the same
///   name.
pub fn merge(left: &DailyTable, right: &DailyTable, date_column: &str) -> Result<DailyTable> {
    if left.range() != right.range() {
        return Err(Error::RangeMismatch {
            left: left.range().to_string(),
            right: right.range().to_string(),
        });
    }

    let mut out = DailyTable::new(left.range());
    out.rename_date_column(date_column);
    for col in left.columns().iter().chain(right.columns()) {
        out.push_column(col.clone())?;
    }

    let (rows, cols) = out.shape();
    info!("merged table: {rows} rows x {cols} columns over {}", out.range());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hcal_time::{Date, DateRange};

    fn range(y1: u16, y2: u16) -> DateRange {
        DateRange::years(y1, y2).unwrap()
    }

    #[test]
    fn columns_concatenate_in_order() {
        let mut a = DailyTable::new(range(2024, 2024));
        a.add_zero_column("a").unwrap();
        let mut b = DailyTable::new(range(2024, 2024));
        b.add_zero_column("b")
            .unwrap()
            .set(Date::from_ymd(2024, 3, 1).unwrap(), 1);

        let m = merge(&a, &b, "ds").unwrap();
        assert_eq!(m.date_column(), "ds");
        assert_eq!(m.column_names(), vec!["a", "b"]);
        assert_eq!(m.len(), 366);
        assert_eq!(m.value("b", Date::from_ymd(2024, 3, 1).unwrap()), Some(1));
    }

    #[test]
    fn diverging_ranges_are_fatal() {
        let a = DailyTable::new(range(2022, 2031));
        let b = DailyTable::new(range(2022, 2030));
        assert!(matches!(merge(&a, &b, "ds"), Err(Error::RangeMismatch { .. })));
    }

    #[test]
    fn merged_columns_cover_every_row() {
        let mut a = DailyTable::new(range(2023, 2024));
        a.add_zero_column("a").unwrap();
        let mut b = DailyTable::new(range(2023, 2024));
        b.add_zero_column("b").unwrap();
        let m = merge(&a, &b, "ds").unwrap();
        assert_eq!(m.shape(), (731, 3));
        assert!(m.columns().iter().all(|c| c.values().len() == m.len()));
        assert!(m.rows().all(|r| r.values.len() == 2));
    }

    #[test]
    fn clashing_column_names_rejected() {
        let mut a = DailyTable::new(range(2024, 2024));
        a.add_zero_column("x").unwrap();
        let mut b = DailyTable::new(range(2024, 2024));
        b.add_zero_column("x").unwrap();
        assert!(matches!(merge(&a, &b, "ds"), Err(Error::InvalidArgument(_))));
    }
}
