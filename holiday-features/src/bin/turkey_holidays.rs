//! Writes the 2022–2031 Turkey holiday feature table as CSV.
//!
//! Usage: `turkey-holidays [OUTPUT]`
//!
//! `OUTPUT` defaults to `Turkey_official_and_religious_days.csv`.  Set
//! `RUST_LOG=debug` to see the intermediate table shapes.

use std::process::ExitCode;

use holiday_features::features::{export, turkey_holiday_table};
use log::error;

const DEFAULT_OUTPUT: &str = "Turkey_official_and_religious_days.csv";

fn main() -> ExitCode {
    env_logger::init();

    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    let result = turkey_holiday_table().and_then(|table| export::write_csv_file(&table, &output));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("holiday table not written: {e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
