// ============================================================
// FORMAT CONVERSION
// ============================================================
// Serialize a table into the requested export artifact

use crate::domain::error::Result;
use crate::domain::export::{replace_extension, ConversionRequest, ExportArtifact, TargetFormat};
use crate::domain::table::Table;
use crate::infrastructure::formats::{CsvWriter, XlsxWriter};

/// Serialize `table` in the requested format and derive the artifact's
/// suggested filename (the original name with its extension replaced)
/// and MIME type. Every column and row present in the table appears in
/// the artifact, in order.
pub fn convert(
    table: &Table,
    request: &ConversionRequest,
    original_name: &str,
) -> Result<ExportArtifact> {
    let bytes = match request.target_format {
        TargetFormat::Csv => CsvWriter::write(table)?,
        TargetFormat::Excel => XlsxWriter::write(table)?,
    };

    Ok(ExportArtifact {
        bytes,
        filename: replace_extension(original_name, request.target_format.extension()),
        mime_type: request.target_format.mime_type().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        Table::from_rows(
            vec!["a".to_string(), "b".to_string()],
            vec![vec!["1".to_string(), "2".to_string()]],
        )
    }

    #[test]
    fn test_convert_xlsx_upload_to_csv() {
        let request = ConversionRequest {
            target_format: TargetFormat::Csv,
        };
        let artifact = convert(&sample_table(), &request, "report.xlsx").unwrap();

        assert_eq!(artifact.filename, "report.csv");
        assert_eq!(artifact.mime_type, "text/csv");
        assert_eq!(artifact.bytes, b"a,b\n1,2\n");
    }

    #[test]
    fn test_convert_csv_upload_to_excel() {
        let request = ConversionRequest {
            target_format: TargetFormat::Excel,
        };
        let artifact = convert(&sample_table(), &request, "data.csv").unwrap();

        assert_eq!(artifact.filename, "data.xlsx");
        assert_eq!(
            artifact.mime_type,
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        );
        assert!(!artifact.bytes.is_empty());
    }
}
