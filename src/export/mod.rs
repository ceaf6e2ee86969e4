pub mod capability;
pub mod delimited;
pub mod spreadsheet;
pub mod table;

use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CSV_FILE_NAME, CSV_MIME_TYPE, XLSX_FILE_NAME, XLSX_MIME_TYPE};
use crate::error::{ErrorContext, SmelResult};
use crate::logging::log_info;

pub use capability::ExportCapabilities;
pub use delimited::to_csv_bytes;
pub use spreadsheet::to_spreadsheet_bytes;
pub use table::{ExportRow, ExportTable, to_table};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Csv => CSV_FILE_NAME,
            ExportFormat::Xlsx => XLSX_FILE_NAME,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => CSV_MIME_TYPE,
            ExportFormat::Xlsx => XLSX_MIME_TYPE,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Xlsx => "XLSX",
        }
    }

    pub fn to_bytes(&self, table: &ExportTable) -> SmelResult<Vec<u8>> {
        match self {
            ExportFormat::Csv => to_csv_bytes(table),
            ExportFormat::Xlsx => to_spreadsheet_bytes(table),
        }
    }
}

/// Serializes `table` and writes it to `dir/<file name>`, creating `dir`
/// if needed. Returns the written path.
pub fn write_export(table: &ExportTable, format: ExportFormat, dir: &Path) -> SmelResult<PathBuf> {
    let bytes = format.to_bytes(table)?;

    fs::create_dir_all(dir)
        .with_context(|| format!("Creating export directory {}", dir.display()))?;

    let path = dir.join(format.file_name());
    fs::write(&path, &bytes)?;
    log_info(&format!(
        "Exported {} rows as {} ({}, {} bytes) to {}",
        table.rows.len(),
        format.label(),
        format.mime_type(),
        bytes.len(),
        path.display()
    ));

    Ok(path)
}
