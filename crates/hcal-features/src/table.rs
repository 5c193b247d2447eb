//! Dense daily indicator tables.
//!
//! A [`DailyTable`] has exactly one row per day of its [`DateRange`] and any
//! number of named 0/1 indicator columns.  Every column is stored as a
//! `TimeSeries<Date, u8>` holding a value for every day of the range, so
//! cells are addressed by date rather than by row position.

use hcal_core::errors::{Error, Result};
use hcal_core::TimeSeries;
use hcal_time::{Date, DateRange};

/// Default name of the date column before the merger renames it.
pub const DEFAULT_DATE_COLUMN: &str = "date";

/// A named 0/1 indicator column, dense over its table's range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorColumn {
    name: String,
    values: TimeSeries<Date, u8>,
}

impl IndicatorColumn {
    /// An all-zero column over `range`.
    pub fn zeros(name: impl Into<String>, range: DateRange) -> Self {
        Self {
            name: name.into(),
            values: TimeSeries::filled(range, 0),
        }
    }

    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value on `date`, or `None` outside the range.
    pub fn get(&self, date: Date) -> Option<u8> {
        self.values.get(&date).copied()
    }

    /// The underlying series.
    pub fn values(&self) -> &TimeSeries<Date, u8> {
        &self.values
    }

    /// Number of days flagged 1.
    pub fn count_ones(&self) -> usize {
        self.values.iter().filter(|&(_, &v)| v == 1).count()
    }

    /// The days flagged 1, in ascending order.
    pub fn flagged_dates(&self) -> Vec<Date> {
        self.values
            .iter()
            .filter(|&(_, &v)| v == 1)
            .map(|(d, _)| *d)
            .collect()
    }

    /// The first flagged day within `range`.
    pub fn first_flagged_in(&self, range: DateRange) -> Option<Date> {
        self.values
            .range(range.start()..=range.end())
            .find(|&(_, &v)| v == 1)
            .map(|(d, _)| *d)
    }

    /// Set the value on `date`.  Returns `false` if `date` is outside the
    /// column's range, in which case nothing changes.
    pub fn set(&mut self, date: Date, value: u8) -> bool {
        debug_assert!(value <= 1, "indicator values are 0 or 1");
        match self.values.get_mut(&date) {
            Some(v) => {
                *v = value;
                true
            }
            None => false,
        }
    }

    /// Row-wise logical OR with `other`, which must cover the same days.
    fn or_assign(&mut self, other: &IndicatorColumn) {
        for (d, &v) in other.values.iter() {
            if v == 1 {
                self.set(*d, 1);
            }
        }
    }
}

/// One output row: a date and the value of every column, in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyRow {
    /// The row's day.
    pub date: Date,
    /// Indicator values in column order.
    pub values: Vec<u8>,
}

/// A dense per-day table of indicator columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyTable {
    date_column: String,
    range: DateRange,
    columns: Vec<IndicatorColumn>,
}

impl DailyTable {
    /// A table over `range` with no indicator columns.
    pub fn new(range: DateRange) -> Self {
        Self {
            date_column: DEFAULT_DATE_COLUMN.to_string(),
            range,
            columns: Vec::new(),
        }
    }

    // ── Inspectors ───────────────────────────────────────────────────────

    /// Name of the date column.
    pub fn date_column(&self) -> &str {
        &self.date_column
    }

    /// The covered days.
    pub fn range(&self) -> DateRange {
        self.range
    }

    /// Number of rows (one per day).
    pub fn len(&self) -> usize {
        self.range.len()
    }

    /// A table always has at least one row.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Indicator column names, in order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    /// Indicator columns, in order.
    pub fn columns(&self) -> &[IndicatorColumn] {
        &self.columns
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&IndicatorColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Value of column `name` on `date`.
    pub fn value(&self, name: &str, date: Date) -> Option<u8> {
        self.column(name)?.get(date)
    }

    /// `(rows, columns)` including the date column.
    pub fn shape(&self) -> (usize, usize) {
        (self.len(), self.columns.len() + 1)
    }

    // ── Mutation ─────────────────────────────────────────────────────────

    /// Rename the date column.
    pub fn rename_date_column(&mut self, name: impl Into<String>) {
        self.date_column = name.into();
    }

    /// Append an all-zero column.
    ///
    /// # Errors
    /// Returns an error if a column with that name already exists.
    pub fn add_zero_column(&mut self, name: impl Into<String>) -> Result<&mut IndicatorColumn> {
        let col = IndicatorColumn::zeros(name, self.range);
        self.push_column(col)
    }

    /// Append an existing column.
    ///
    /// # Errors
    /// Returns an error on a duplicate name or if the column does not cover
    /// exactly this table's days.
    pub fn push_column(&mut self, column: IndicatorColumn) -> Result<&mut IndicatorColumn> {
        if self.column(column.name()).is_some() {
            return Err(Error::InvalidArgument(format!(
                "duplicate column '{}'",
                column.name()
            )));
        }
        let covers = column.values.len() == self.range.len()
            && column.values.first_key() == Some(&self.range.start())
            && column.values.last_key() == Some(&self.range.end());
        if !covers {
            return Err(Error::RangeMismatch {
                left: self.range.to_string(),
                right: format!("column '{}' with {} days", column.name(), column.values.len()),
            });
        }
        self.columns.push(column);
        let last = self.columns.len() - 1;
        Ok(&mut self.columns[last])
    }

    /// Mutable access to a column by name.
    pub fn column_mut(&mut self, name: &str) -> Option<&mut IndicatorColumn> {
        self.columns.iter_mut().find(|c| c.name == name)
    }

    /// Remove and return every column for which `pred` holds, keeping the
    /// order of the rest.
    pub fn take_columns(&mut self, mut pred: impl FnMut(&str) -> bool) -> Vec<IndicatorColumn> {
        let (taken, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.columns)
            .into_iter()
            .partition(|c| pred(c.name()));
        self.columns = kept;
        taken
    }

    /// Replace the columns for which `pred` holds by a single column `name`
    /// holding their row-wise logical OR.  The new column is appended even
    /// if no column matched (it is then all zero).
    pub fn collapse_columns(
        &mut self,
        name: &str,
        pred: impl FnMut(&str) -> bool,
    ) -> Result<usize> {
        let sources = self.take_columns(pred);
        let mut merged = IndicatorColumn::zeros(name, self.range);
        for src in &sources {
            merged.or_assign(src);
        }
        self.push_column(merged)?;
        Ok(sources.len())
    }

    // ── Rows ─────────────────────────────────────────────────────────────

    /// Iterate over the rows in date order.
    pub fn rows(&self) -> impl Iterator<Item = DailyRow> + '_ {
        self.range.iter().map(move |date| DailyRow {
            date,
            values: self
                .columns
                .iter()
                .map(|c| c.get(date).unwrap_or(0))
                .collect(),
        })
    }
}
