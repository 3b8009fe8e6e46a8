// ============================================================
// EXPORT TYPES
// ============================================================
// Conversion request and the terminal artifact of the pipeline

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target format chosen by the user for conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetFormat {
    Csv,
    Excel,
}

impl TargetFormat {
    /// File extension of the exported artifact
    pub fn extension(&self) -> &'static str {
        match self {
            TargetFormat::Csv => "csv",
            TargetFormat::Excel => "xlsx",
        }
    }

    /// MIME type handed to the browser download mechanism
    pub fn mime_type(&self) -> &'static str {
        match self {
            TargetFormat::Csv => "text/csv",
            TargetFormat::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetFormat::Csv => write!(f, "CSV"),
            TargetFormat::Excel => write!(f, "Excel"),
        }
    }
}

/// One-shot conversion request, produced by user selection and
/// consumed once by the format writer
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub target_format: TargetFormat,
}

/// Terminal output of the pipeline: the serialized table plus the
/// metadata the download mechanism needs
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    /// Complete artifact content, readable from offset zero
    pub bytes: Vec<u8>,

    /// Suggested download file name
    pub filename: String,

    /// MIME type for the download response
    pub mime_type: String,
}

/// Replace the final extension of `name` with `extension`; a name
/// without an extension gets one appended.
pub fn replace_extension(name: &str, extension: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, _)) => format!("{}.{}", stem, extension),
        None => format!("{}.{}", name, extension),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_extension() {
        assert_eq!(replace_extension("report.xlsx", "csv"), "report.csv");
        assert_eq!(replace_extension("data.backup.csv", "xlsx"), "data.backup.xlsx");
        assert_eq!(replace_extension("data", "csv"), "data.csv");
    }

    #[test]
    fn test_target_format_metadata() {
        assert_eq!(TargetFormat::Csv.mime_type(), "text/csv");
        assert_eq!(TargetFormat::Excel.extension(), "xlsx");
    }
}
