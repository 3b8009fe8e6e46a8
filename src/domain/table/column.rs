// ============================================================
// COLUMN
// ============================================================
// A named, typed, ordered sequence of cells

use serde::{Deserialize, Serialize};

use super::{CellValue, ColumnType};

/// One table column: a name, an inferred type, and its cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name (unique within a table)
    pub name: String,

    /// Inferred semantic type
    pub kind: ColumnType,

    /// Cell values, one per row
    pub cells: Vec<CellValue>,
}

impl Column {
    /// Build a column from raw string values via the classification
    /// pass: infer the type first, then materialize every cell under it.
    pub fn from_raw(name: impl Into<String>, raw_values: &[String]) -> Self {
        let kind = ColumnType::infer(raw_values);
        let cells = raw_values
            .iter()
            .map(|raw| CellValue::materialize(raw, kind))
            .collect();

        Self {
            name: name.into(),
            kind,
            cells,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Non-missing numeric values, in row order
    pub fn numeric_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.cells.iter().filter_map(CellValue::as_numeric)
    }

    pub fn missing_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_missing()).count()
    }
}
