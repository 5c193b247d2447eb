//! Secular holiday features.
//!
//! One indicator column per fixed-date holiday, flagged on every day of the
//! range whose month and day match.

use hcal_core::errors::Result;
use hcal_time::{DateRange, FixedHoliday};
use log::debug;

use crate::table::DailyTable;

/// Build one column per holiday in `holidays`, in the given order.
///
/// # Errors
/// Returns an error if two holidays share a name.
pub fn build_secular_features(range: DateRange, holidays: &[FixedHoliday]) -> Result<DailyTable> {
    let mut table = DailyTable::new(range);
    for holiday in holidays {
        let col = table.add_zero_column(holiday.name)?;
        for year in range.year_span() {
            if let Some(day) = holiday.in_year(year) {
                col.set(day, 1);
            }
        }
    }
    debug!(
        "secular table shape {:?}, columns {:?}",
        table.shape(),
        table.column_names()
    );
    Ok(table)
}
