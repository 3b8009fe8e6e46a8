// ============================================================
// XLSX WRITER
// ============================================================
// Serialize a table to a single-sheet Excel workbook

use rust_xlsxwriter::Workbook;

use crate::domain::error::{AppError, Result};
use crate::domain::table::{CellValue, Table};

/// Excel workbook serializer for export artifacts
pub struct XlsxWriter;

impl XlsxWriter {
    /// Serialize the whole table into one worksheet: header row first,
    /// no index column. Missing cells are left empty.
    pub fn write(table: &Table) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        for (col_index, column) in table.columns().iter().enumerate() {
            let col = col_index as u16;
            worksheet
                .write_string(0, col, &column.name)
                .map_err(|e| AppError::ExportError(format!("failed to write header: {}", e)))?;

            for (row_index, cell) in column.cells.iter().enumerate() {
                let row = row_index as u32 + 1;
                match cell {
                    CellValue::Numeric(value) => worksheet.write_number(row, col, *value),
                    CellValue::Boolean(value) => worksheet.write_boolean(row, col, *value),
                    CellValue::Text(value) => worksheet.write_string(row, col, value),
                    CellValue::Missing => continue,
                }
                .map_err(|e| {
                    AppError::ExportError(format!(
                        "failed to write cell at row {}, column {}: {}",
                        row, column.name, e
                    ))
                })?;
            }
        }

        workbook
            .save_to_buffer()
            .map_err(|e| AppError::ExportError(format!("failed to serialize workbook: {}", e)))
    }
}
