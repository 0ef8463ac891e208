//! CSV ingestion
//!
//! The source file carries two non-data header lines before the real header
//! row, an unnamed first column holding year labels, and one column per
//! fuel series with blanks for years before a fuel existed.

use std::path::Path;

use polars::prelude::*;

use crate::error::Result;

/// Columns the source file must provide (everything melted except the
/// derived Other Renewables series).
pub const REQUIRED_COLUMNS: [&str; 10] = [
    "Coal",
    "Natural Gas",
    "Petroleum",
    "Nuclear",
    "Hydropower",
    "Wood/biomass",
    "Solar",
    "Wind",
    "Total Fossil",
    "Total Renewable Energy",
];

/// Number of non-data lines before the header row
const HEADER_SKIP_ROWS: usize = 2;

/// Load the wide consumption table from a CSV file.
///
/// - skips the two pre-header lines
/// - renames the first column to `Year` and casts it to Int64
/// - casts every required series column to Float64 with nulls filled as 0
///
/// A missing file surfaces as `Error::FileAccess`; a missing column or
/// unparseable cell as `Error::Parse`. Both abort the run.
pub fn load_wide(path: &Path) -> Result<DataFrame> {
    // Absent or unreadable files must surface as FileAccess, not as a
    // polars parse failure.
    std::fs::metadata(path)?;

    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_skip_rows(HEADER_SKIP_ROWS)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    let first = df.get_column_names()[0].to_string();
    df.rename(&first, "Year".into())?;

    let year = df
        .column("Year")?
        .as_materialized_series()
        .cast(&DataType::Int64)?;
    df.with_column(year)?;

    for name in REQUIRED_COLUMNS {
        let filled = df
            .column(name)?
            .as_materialized_series()
            .cast(&DataType::Float64)?
            .fill_null(FillNullStrategy::Zero)?;
        df.with_column(filled)?;
    }

    Ok(df)
}
