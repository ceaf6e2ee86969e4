use csv::{Terminator, WriterBuilder};

use crate::error::{SmelError, SmelResult};
use super::table::ExportTable;

/// UTF-8 CSV, header row first, `\n` between records.
pub fn to_csv_bytes(table: &ExportTable) -> SmelResult<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(table.headers)?;
    for row in &table.rows {
        writer.write_record(row.cells())?;
    }

    writer
        .into_inner()
        .map_err(|e| SmelError::ExportError(format!("Failed to flush CSV: {}", e)))
}
