//! Export ranked results to CSV or JSON.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::path::Path;

use crate::error::AppError;
use crate::report::ResultTable;

/// Write ranked rows to a CSV file.
///
/// Columns are `value,error,r1,r2,configuration`; `configuration` is empty
/// outside resistance mode.
pub fn write_results_csv(path: &Path, table: &ResultTable) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::input_source(format!("Failed to create export CSV '{}': {e}", path.display()))
    })?;
    let mut writer = csv::Writer::from_writer(file);

    for row in &table.rows {
        writer
            .serialize(row)
            .map_err(|e| AppError::input_source(format!("Failed to write export CSV row: {e}")))?;
    }
    writer
        .flush()
        .map_err(|e| AppError::input_source(format!("Failed to flush export CSV: {e}")))?;

    Ok(())
}

/// Write the whole table (mode + rows) as pretty JSON.
pub fn write_results_json(path: &Path, table: &ResultTable) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::input_source(format!("Failed to create export JSON '{}': {e}", path.display()))
    })?;

    serde_json::to_writer_pretty(file, table)
        .map_err(|e| AppError::input_source(format!("Failed to write export JSON: {e}")))?;

    Ok(())
}
