// ============================================================
// XLSX READER
// ============================================================
// Decode the first worksheet of an Excel workbook into a table

use std::io::Cursor;

use calamine::{Data, DataType, Reader, Xlsx};

use crate::domain::error::{AppError, Result};
use crate::domain::table::Table;

/// Excel workbook reader
pub struct XlsxReader;

impl XlsxReader {
    /// Parse the first worksheet, first row as header. Every cell is
    /// rendered to its string form and pushed through the same
    /// classification pass as CSV content, so both formats share one
    /// type-inference path.
    pub fn read(bytes: &[u8]) -> Result<Table> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))
            .map_err(|e| AppError::MalformedFile(format!("failed to open Excel workbook: {}", e)))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| AppError::MalformedFile("no worksheet found".to_string()))?
            .map_err(|e| AppError::MalformedFile(format!("failed to read Excel range: {}", e)))?;

        let mut rows = range.rows();
        let headers: Vec<String> = match rows.next() {
            Some(row) => row.iter().map(render_cell).collect(),
            None => Vec::new(),
        };
        let data: Vec<Vec<String>> = rows
            .map(|row| row.iter().map(render_cell).collect())
            .collect();

        Ok(Table::from_rows(headers, data))
    }
}

/// Render a workbook cell to its string form; empty cells become
/// empty strings.
fn render_cell(cell: &Data) -> String {
    cell.as_string()
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("{}", cell))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_are_malformed() {
        match XlsxReader::read(b"definitely not a zip archive") {
            Err(AppError::MalformedFile(_)) => {}
            other => panic!("expected MalformedFile, got {:?}", other),
        }
    }
}
