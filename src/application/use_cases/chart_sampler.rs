// ============================================================
// CHART SAMPLER
// ============================================================
// Extract up to two numeric columns for the default visualization

use crate::domain::table::{ColumnType, Table};

/// Select at most the first two numeric columns, in table order, as
/// row-aligned raw values for direct plotting. No aggregation or
/// bucketing. Fewer than two numeric columns is not an error: the
/// result carries 0, 1, or 2 columns, and zero means "nothing to
/// chart".
pub fn sample_for_chart(table: &Table) -> Table {
    let columns = table
        .columns()
        .iter()
        .filter(|column| column.kind == ColumnType::Numeric)
        .take(2)
        .cloned()
        .collect();

    Table::from_validated(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_takes_first_two_numeric_columns() {
        let table = Table::from_rows(
            vec![
                "label".to_string(),
                "x".to_string(),
                "y".to_string(),
                "z".to_string(),
            ],
            vec![vec![
                "a".to_string(),
                "1".to_string(),
                "2".to_string(),
                "3".to_string(),
            ]],
        );

        let sample = sample_for_chart(&table);

        assert_eq!(sample.column_names(), vec!["x", "y"]);
    }

    #[test]
    fn test_sample_never_exceeds_two_columns() {
        let table = Table::from_rows(
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            vec![vec!["1".to_string(), "2".to_string(), "3".to_string()]],
        );

        assert_eq!(sample_for_chart(&table).column_count(), 2);
    }

    #[test]
    fn test_sample_with_one_numeric_column() {
        let table = Table::from_rows(
            vec!["word".to_string(), "n".to_string()],
            vec![vec!["hi".to_string(), "7".to_string()]],
        );

        let sample = sample_for_chart(&table);

        assert_eq!(sample.column_names(), vec!["n"]);
    }

    #[test]
    fn test_sample_without_numeric_columns_is_empty() {
        let table = Table::from_rows(
            vec!["word".to_string()],
            vec![vec!["hi".to_string()]],
        );

        assert_eq!(sample_for_chart(&table).column_count(), 0);
    }
}
