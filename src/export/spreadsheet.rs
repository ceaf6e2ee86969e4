use crate::error::SmelResult;
use super::table::ExportTable;

#[cfg(feature = "xlsx")]
pub fn to_spreadsheet_bytes(table: &ExportTable) -> SmelResult<Vec<u8>> {
    use rust_xlsxwriter::{Format, Workbook};

    use crate::constants::XLSX_SHEET_NAME;

    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(XLSX_SHEET_NAME)?;

    for (col, header) in table.headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (index, row) in table.rows.iter().enumerate() {
        let line = index as u32 + 1;
        for (col, cell) in row.cells().iter().enumerate() {
            worksheet.write_string(line, col as u16, *cell)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

#[cfg(not(feature = "xlsx"))]
pub fn to_spreadsheet_bytes(_table: &ExportTable) -> SmelResult<Vec<u8>> {
    Err(crate::error::SmelError::CapabilityUnavailable(
        "XLSX export requires the 'xlsx' feature".to_string(),
    ))
}
