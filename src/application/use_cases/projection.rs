// ============================================================
// COLUMN PROJECTION
// ============================================================
// Restrict a table to a chosen column subset, preserving source order

use std::collections::HashSet;

use crate::domain::error::{AppError, Result};
use crate::domain::table::Table;

/// Return a new table containing only the selected columns, in the
/// relative order they appear in the source table (the order of
/// `selected` is irrelevant). An empty selection yields a valid
/// zero-column table; a name not present in the table is a validation
/// error. The input table is not mutated.
pub fn project(table: &Table, selected: &HashSet<String>) -> Result<Table> {
    for name in selected {
        if table.column(name).is_none() {
            return Err(AppError::ValidationError(format!(
                "unknown column in selection: {}",
                name
            )));
        }
    }

    let columns = table
        .columns()
        .iter()
        .filter(|column| selected.contains(&column.name))
        .cloned()
        .collect();

    Ok(Table::from_validated(columns))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        Table::from_rows(
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            vec![vec!["1".to_string(), "2".to_string(), "3".to_string()]],
        )
    }

    fn selection(names: &[&str]) -> HashSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_project_preserves_source_order() {
        let table = sample_table();

        // Selection order does not matter; table order wins
        let projected = project(&table, &selection(&["c", "a"])).unwrap();

        assert_eq!(projected.column_names(), vec!["a", "c"]);
    }

    #[test]
    fn test_project_empty_selection_yields_zero_columns() {
        let table = sample_table();
        let projected = project(&table, &HashSet::new()).unwrap();

        assert_eq!(projected.column_count(), 0);
        assert_eq!(projected.row_count(), 0);
    }

    #[test]
    fn test_project_rejects_unknown_column() {
        let table = sample_table();
        assert!(project(&table, &selection(&["a", "nope"])).is_err());
    }

    #[test]
    fn test_project_does_not_mutate_the_source() {
        let table = sample_table();
        let _ = project(&table, &selection(&["b"])).unwrap();

        assert_eq!(table.column_names(), vec!["a", "b", "c"]);
    }
}
