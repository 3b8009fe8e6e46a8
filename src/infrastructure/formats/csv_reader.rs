// ============================================================
// CSV READER
// ============================================================
// Parse CSV byte streams with encoding and delimiter detection

use csv::{ReaderBuilder, Trim};

use crate::domain::error::{AppError, Result};
use crate::domain::table::Table;

/// Delimiters considered by auto-detection
const DELIMITER_CANDIDATES: [u8; 4] = [b',', b';', b'\t', b'|'];

/// CSV reader with encoding and delimiter detection
pub struct CsvReader {
    /// Delimiter override; `None` means auto-detect
    delimiter: Option<u8>,

    /// Whether to trim whitespace from headers and values
    trim: bool,
}

impl Default for CsvReader {
    fn default() -> Self {
        Self {
            delimiter: None,
            trim: true,
        }
    }
}

impl CsvReader {
    /// Create a new CSV reader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a fixed delimiter instead of auto-detecting
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Parse CSV content into a table, first row as header
    pub fn read(&self, bytes: &[u8]) -> Result<Table> {
        let content = decode_bytes(bytes);
        let delimiter = self
            .delimiter
            .unwrap_or_else(|| detect_delimiter(&content));

        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .flexible(true) // Allow rows with different lengths
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| AppError::MalformedFile(format!("failed to read CSV headers: {}", e)))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::MalformedFile(format!("failed to parse CSV row {}: {}", index + 1, e))
            })?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Table::from_rows(headers, rows))
    }
}

/// Decode bytes as UTF-8, falling back to Windows-1252 for legacy
/// exports.
fn decode_bytes(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(content) => content.to_string(),
        Err(_) => {
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            decoded.into_owned()
        }
    }
}

/// Detect the most likely delimiter by scoring each candidate on
/// per-line count consistency over a sample of lines.
fn detect_delimiter(content: &str) -> u8 {
    let sample_lines: Vec<&str> = content.lines().take(10).collect();

    let mut best_delimiter = b',';
    let mut best_score = 0.0f32;

    for &delimiter in &DELIMITER_CANDIDATES {
        let counts: Vec<usize> = sample_lines
            .iter()
            .map(|line| line.bytes().filter(|&b| b == delimiter).count())
            .collect();

        if counts.is_empty() {
            continue;
        }

        let avg = counts.iter().sum::<usize>() as f32 / counts.len() as f32;
        let variance = counts
            .iter()
            .map(|&count| (count as f32 - avg).powi(2))
            .sum::<f32>()
            / counts.len() as f32;

        // Score by consistency (low standard deviation) and frequency
        let score = avg / (1.0 + variance.sqrt());

        if score > best_score {
            best_score = score;
            best_delimiter = delimiter;
        }
    }

    best_delimiter
}
