//! Tabular export of a run result

use crate::config::OutputFormat;
use crate::error::{CvExtractorError, Result};
use crate::processing::record::{RunResult, CSV_COLUMNS};
use log::{info, warn};
use serde_json::Value;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write header plus one row per record in the fixed column order.
pub fn write_csv<W: Write>(result: &RunResult, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_COLUMNS)?;

    for record in result.records() {
        wtr.write_record(CSV_COLUMNS.iter().map(|column| record.column_text(column)))?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(result: &RunResult, writer: W) -> Result<()> {
    let records: Vec<Value> = result.records().iter().map(|r| r.to_json()).collect();
    let mut writer = BufWriter::new(writer);
    serde_json::to_writer_pretty(&mut writer, &records)?;
    writer.flush()?;
    Ok(())
}

/// Save the records to `path`. An empty result writes nothing and is an error.
pub fn export(result: &RunResult, path: &Path, format: OutputFormat) -> Result<usize> {
    if result.is_empty() {
        warn!("No data to save");
        return Err(CvExtractorError::NothingToExport);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    match format {
        OutputFormat::Csv => write_csv(result, file)?,
        OutputFormat::Json => write_json(result, file)?,
    }

    info!("Data saved to {}", path.display());
    info!("Total records: {}", result.len());
    Ok(result.len())
}
