//! CSV export of daily tables.

use std::io::Write;
use std::path::Path;

use hcal_core::errors::{Error, Result};
use log::info;

use crate::table::DailyTable;

fn export_err(e: impl std::fmt::Display) -> Error {
    Error::Export(e.to_string())
}

/// Write `table` as CSV: a header row, then one row per day with the date as
/// `YYYY-MM-DD` and every indicator as `0` or `1`.
pub fn write_csv<W: Write>(table: &DailyTable, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = Vec::with_capacity(table.columns().len() + 1);
    header.push(table.date_column());
    header.extend(table.column_names());
    wtr.write_record(&header).map_err(export_err)?;

    for row in table.rows() {
        let mut record = Vec::with_capacity(row.values.len() + 1);
        record.push(row.date.to_string());
        record.extend(row.values.iter().map(u8::to_string));
        wtr.write_record(&record).map_err(export_err)?;
    }
    wtr.flush().map_err(export_err)
}

/// Write `table` as CSV to `path`, replacing any existing file.
pub fn write_csv_file(table: &DailyTable, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .map_err(|e| Error::Export(format!("{}: {e}", path.display())))?;
    write_csv(table, std::io::BufWriter::new(file))?;
    info!("wrote {} rows to {}", table.len(), path.display());
    Ok(())
}

/// Render `table` as a CSV string.
pub fn to_csv_string(table: &DailyTable) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(table, &mut buf)?;
    String::from_utf8(buf).map_err(export_err)
}
