// ============================================================
// CELL VALUES
// ============================================================
// Tagged cell representation and column type inference

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single cell value, tagged with its inferred semantic type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CellValue {
    /// Numeric value, stored as a 64-bit float
    Numeric(f64),

    /// Boolean literal (`true` / `false`)
    Boolean(bool),

    /// Anything that is neither numeric nor boolean
    Text(String),

    /// Empty field (the missing-marker)
    Missing,
}

impl CellValue {
    /// Materialize a raw string value under an inferred column type.
    /// Empty or whitespace-only values become the missing-marker.
    pub fn materialize(raw: &str, kind: ColumnType) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Missing;
        }

        match kind {
            ColumnType::Numeric => trimmed
                .parse::<f64>()
                .map(CellValue::Numeric)
                .unwrap_or_else(|_| CellValue::Text(trimmed.to_string())),
            ColumnType::Boolean => {
                CellValue::Boolean(trimmed.eq_ignore_ascii_case("true"))
            }
            ColumnType::Text | ColumnType::Missing => CellValue::Text(trimmed.to_string()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            CellValue::Numeric(value) => Some(*value),
            _ => None,
        }
    }

    /// Render the cell for serialization and previews.
    /// Missing cells render as the empty string; integral numeric
    /// values render without a trailing `.0`.
    pub fn render(&self) -> String {
        match self {
            CellValue::Numeric(value) => format!("{}", value),
            CellValue::Boolean(value) => value.to_string(),
            CellValue::Text(value) => value.clone(),
            CellValue::Missing => String::new(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

// Duplicate detection uses whole rows as hash-set keys, so numeric
// cells compare and hash by bit pattern.
impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CellValue::Numeric(a), CellValue::Numeric(b)) => a.to_bits() == b.to_bits(),
            (CellValue::Boolean(a), CellValue::Boolean(b)) => a == b,
            (CellValue::Text(a), CellValue::Text(b)) => a == b,
            (CellValue::Missing, CellValue::Missing) => true,
            _ => false,
        }
    }
}

impl Eq for CellValue {}

impl Hash for CellValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            CellValue::Numeric(value) => value.to_bits().hash(state),
            CellValue::Boolean(value) => value.hash(state),
            CellValue::Text(value) => value.hash(state),
            CellValue::Missing => {}
        }
    }
}

/// Inferred semantic type of a whole column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Every non-missing value parses as a 64-bit float
    Numeric,

    /// Every non-missing value is a `true`/`false` literal
    Boolean,

    /// Mixed or free-form content
    Text,

    /// No non-missing values at all
    Missing,
}

impl ColumnType {
    /// Classify a column from its raw string values. This is an
    /// explicit pass over parsed cells: the column is `Numeric` only
    /// if every non-missing value parses as a float, `Boolean` only if
    /// every non-missing value is a boolean literal, `Missing` if the
    /// column has no non-missing values.
    pub fn infer<S: AsRef<str>>(raw_values: &[S]) -> Self {
        let mut any_value = false;
        let mut all_numeric = true;
        let mut all_boolean = true;

        for raw in raw_values {
            let trimmed = raw.as_ref().trim();
            if trimmed.is_empty() {
                continue;
            }
            any_value = true;

            if trimmed.parse::<f64>().is_err() {
                all_numeric = false;
            }
            if !trimmed.eq_ignore_ascii_case("true") && !trimmed.eq_ignore_ascii_case("false") {
                all_boolean = false;
            }
            if !all_numeric && !all_boolean {
                return ColumnType::Text;
            }
        }

        if !any_value {
            ColumnType::Missing
        } else if all_numeric {
            ColumnType::Numeric
        } else if all_boolean {
            ColumnType::Boolean
        } else {
            ColumnType::Text
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Numeric => write!(f, "numeric"),
            ColumnType::Boolean => write!(f, "boolean"),
            ColumnType::Text => write!(f, "text"),
            ColumnType::Missing => write!(f, "missing"),
        }
    }
}
