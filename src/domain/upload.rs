// ============================================================
// UPLOADED FILE
// ============================================================
// Byte stream plus metadata, owned transiently by the format reader

/// One uploaded file. The pipeline reads it exactly once and does not
/// retain it afterward.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Original file name as supplied by the browser
    pub name: String,

    /// Size in bytes
    pub size: usize,

    /// Raw content
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            size: bytes.len(),
            bytes,
        }
    }

    /// Lowercased final extension of the file name, without the dot.
    /// Empty when the name has no extension.
    pub fn extension(&self) -> String {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default()
    }

    /// Size in kilobytes, for user-facing messages
    pub fn size_kb(&self) -> f64 {
        self.size as f64 / 1024.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_is_lowercased() {
        let file = UploadedFile::new("Report.CSV", vec![1, 2, 3]);
        assert_eq!(file.extension(), "csv");
        assert_eq!(file.size, 3);
    }

    #[test]
    fn test_extension_empty_without_dot() {
        let file = UploadedFile::new("data", Vec::new());
        assert_eq!(file.extension(), "");
    }
}
