// ============================================================
// CSV WRITER
// ============================================================
// Serialize a table to CSV bytes: header row, no index column

use crate::domain::error::{AppError, Result};
use crate::domain::table::Table;

/// CSV serializer for export artifacts
pub struct CsvWriter;

impl CsvWriter {
    /// Serialize the whole table, header first, comma-delimited. The
    /// returned buffer is complete from offset zero. Missing cells
    /// serialize as empty fields.
    pub fn write(table: &Table) -> Result<Vec<u8>> {
        if table.column_count() == 0 {
            return Ok(Vec::new());
        }

        let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());

        writer
            .write_record(table.columns().iter().map(|column| column.name.as_str()))
            .map_err(|e| AppError::ExportError(format!("failed to write CSV header: {}", e)))?;

        for index in 0..table.row_count() {
            let record: Vec<String> = table
                .columns()
                .iter()
                .map(|column| column.cells[index].render())
                .collect();
            writer.write_record(&record).map_err(|e| {
                AppError::ExportError(format!("failed to write CSV row {}: {}", index + 1, e))
            })?;
        }

        writer
            .into_inner()
            .map_err(|e| AppError::ExportError(format!("failed to flush CSV buffer: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::formats::CsvReader;

    fn sample_table() -> Table {
        Table::from_rows(
            vec!["name".to_string(), "score".to_string(), "active".to_string()],
            vec![
                vec!["Alice".to_string(), "1.5".to_string(), "true".to_string()],
                vec!["Bob".to_string(), "".to_string(), "false".to_string()],
            ],
        )
    }

    #[test]
    fn test_write_includes_header_and_all_rows() {
        let bytes = CsvWriter::write(&sample_table()).unwrap();
        let content = String::from_utf8(bytes).unwrap();

        assert_eq!(content, "name,score,active\nAlice,1.5,true\nBob,,false\n");
    }

    #[test]
    fn test_integral_numbers_render_without_decimal_point() {
        let table = Table::from_rows(
            vec!["n".to_string()],
            vec![vec!["2.0".to_string()], vec!["3".to_string()]],
        );
        let bytes = CsvWriter::write(&table).unwrap();

        assert_eq!(String::from_utf8(bytes).unwrap(), "n\n2\n3\n");
    }

    #[test]
    fn test_zero_column_table_writes_nothing() {
        let bytes = CsvWriter::write(&Table::new()).unwrap();
        assert!(bytes.is_empty());
    }

    #[test]
    fn test_round_trip_preserves_names_order_and_values() {
        let table = sample_table();
        let bytes = CsvWriter::write(&table).unwrap();
        let reread = CsvReader::new().read(&bytes).unwrap();

        assert_eq!(reread.column_names(), table.column_names());
        assert_eq!(reread.preview(usize::MAX), table.preview(usize::MAX));
    }
}
