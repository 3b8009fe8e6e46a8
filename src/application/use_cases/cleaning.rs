// ============================================================
// CLEANING OPERATIONS
// ============================================================
// In-place table cleaning: duplicate removal and mean imputation

use std::collections::HashSet;

use crate::domain::table::{CellValue, ColumnType, Table};

/// Delete rows that are exact duplicates of an earlier row across all
/// columns, keeping the first occurrence and preserving the order of
/// the remaining rows. Returns the number of rows removed; applying it
/// again to the result removes nothing.
pub fn remove_duplicates(table: &mut Table) -> usize {
    let mut seen: HashSet<Vec<CellValue>> = HashSet::new();
    let keep: Vec<bool> = (0..table.row_count())
        .map(|index| seen.insert(table.row(index)))
        .collect();

    let removed = keep.iter().filter(|&&kept| !kept).count();
    if removed > 0 {
        table.retain_rows(&keep);
    }
    removed
}

/// Replace missing cells in every numeric column with the arithmetic
/// mean of that column's non-missing values, computed once before any
/// replacement. Non-numeric columns are untouched, and a numeric
/// column with no non-missing values is left as-is (its mean is
/// undefined). Returns the number of cells filled.
pub fn fill_missing_numeric(table: &mut Table) -> usize {
    let mut filled = 0;

    for column in table.columns_mut() {
        if column.kind != ColumnType::Numeric {
            continue;
        }

        let values: Vec<f64> = column.numeric_values().collect();
        if values.is_empty() {
            continue;
        }
        let mean = values.iter().sum::<f64>() / values.len() as f64;

        for cell in column.cells.iter_mut() {
            if cell.is_missing() {
                *cell = CellValue::Numeric(mean);
                filled += 1;
            }
        }
    }

    filled
}
