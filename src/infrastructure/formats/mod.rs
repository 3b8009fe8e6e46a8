// ============================================================
// FORMAT READERS & WRITERS
// ============================================================
// Decode uploaded byte streams into tables and serialize tables
// back out, dispatching on the file extension

mod csv_reader;
mod csv_writer;
mod xlsx_reader;
mod xlsx_writer;

pub use csv_reader::CsvReader;
pub use csv_writer::CsvWriter;
pub use xlsx_reader::XlsxReader;
pub use xlsx_writer::XlsxWriter;

use crate::domain::error::{AppError, Result};
use crate::domain::table::Table;
use crate::domain::upload::UploadedFile;

/// Decode an uploaded file into a table. Unrecognized extensions fail
/// with `UnsupportedFormat`; the caller skips the file and continues
/// with the rest of the batch.
pub fn read(file: &UploadedFile) -> Result<Table> {
    match file.extension().as_str() {
        "csv" => CsvReader::new().read(&file.bytes),
        "xlsx" => XlsxReader::read(&file.bytes),
        extension => Err(AppError::UnsupportedFormat(extension.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_dispatches_on_lowercased_extension() {
        let file = UploadedFile::new("data.CSV", b"a,b\n1,2\n".to_vec());
        let table = read(&file).unwrap();
        assert_eq!(table.column_names(), vec!["a", "b"]);
    }

    #[test]
    fn test_read_rejects_unknown_extension() {
        let file = UploadedFile::new("notes.txt", b"hello".to_vec());
        match read(&file) {
            Err(AppError::UnsupportedFormat(extension)) => assert_eq!(extension, "txt"),
            other => panic!("expected UnsupportedFormat, got {:?}", other),
        }
    }
}
