//! Export Module
//!
//! Writes the current filtered+sorted table view (all pages, raw cell text)
//! to a timestamped file under the data dir's exports/ directory.

mod csv_export;
mod json_export;

pub use csv_export::write_csv;
pub use json_export::write_json;

use std::fs;
use std::path::PathBuf;

use chrono::Local;
use thiserror::Error;

use crate::config;
use crate::core::{Action, NotifyLevel};
use crate::domain::table::DataTable;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no writable export directory")]
    NoExportDir,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

fn export_dir() -> Result<PathBuf, ExportError> {
    let dir = config::data_dir()
        .ok_or(ExportError::NoExportDir)?
        .join("exports");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn generate_filename(prefix: &str, extension: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d-%H%M%S");
    format!("{prefix}-{timestamp}.{extension}")
}

fn export_to(table: &DataTable, format: ExportFormat) -> Result<PathBuf, ExportError> {
    let path = export_dir()?.join(generate_filename("users", format.extension()));
    match format {
        ExportFormat::Csv => write_csv(&path, table)?,
        ExportFormat::Json => write_json(&path, table)?,
    };
    Ok(path)
}

/// Export the current view, reporting the outcome as a status action.
pub fn export_current_view(table: &DataTable, format: ExportFormat) -> Action {
    if table.total_rows() == 0 {
        return Action::Notify("Nothing to export".to_string(), NotifyLevel::Warn);
    }
    match export_to(table, format) {
        Ok(path) => {
            log::info!("exported {} rows to {}", table.total_rows(), path.display());
            Action::Notify(
                format!("Exported {} rows to {}", table.total_rows(), path.display()),
                NotifyLevel::Info,
            )
        }
        Err(err) => {
            log::warn!("export failed: {err}");
            Action::Notify(format!("Export failed: {err}"), NotifyLevel::Error)
        }
    }
}
