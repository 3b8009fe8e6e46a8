// ============================================================
// TABLE DOMAIN LAYER
// ============================================================
// In-memory table model: typed cells, named columns, invariants
// No I/O, no async, no external dependencies

mod cell;
mod column;

pub use cell::{CellValue, ColumnType};
pub use column::Column;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::error::{AppError, Result};

/// An ordered sequence of named, equal-length columns.
///
/// Invariants: all columns have the same length, and column names are
/// unique within the table. Both are enforced by the constructors;
/// duplicate headers from an uploaded file are disambiguated with a
/// numeric suffix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a header row and raw string records.
    /// Records shorter or longer than the header are padded with
    /// missing-markers or truncated to the header width.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let headers = unique_headers(headers);
        let width = headers.len();

        let mut raw_columns: Vec<Vec<String>> = vec![Vec::with_capacity(rows.len()); width];
        for mut row in rows {
            row.resize(width, String::new());
            for (index, value) in row.into_iter().enumerate() {
                raw_columns[index].push(value);
            }
        }

        let columns = headers
            .into_iter()
            .zip(raw_columns)
            .map(|(name, raw)| Column::from_raw(name, &raw))
            .collect();

        Self { columns }
    }

    /// Build a table from prepared columns, validating the invariants.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        if let Some(first) = columns.first() {
            let length = first.len();
            if columns.iter().any(|column| column.len() != length) {
                return Err(AppError::ValidationError(
                    "columns must have equal length".to_string(),
                ));
            }
        }

        let mut names = HashSet::new();
        for column in &columns {
            if !names.insert(column.name.as_str()) {
                return Err(AppError::ValidationError(format!(
                    "duplicate column name: {}",
                    column.name
                )));
            }
        }

        Ok(Self { columns })
    }

    /// Internal constructor for column subsets of an already-valid
    /// table, where the invariants hold by construction.
    pub(crate) fn from_validated(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Mutable column access for in-place cleaning. Callers may replace
    /// cells but must not change column lengths; row removal goes
    /// through `retain_rows`.
    pub fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.name.as_str()).collect()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Clone the cells of one row across all columns.
    /// `index` must be below `row_count`.
    pub fn row(&self, index: usize) -> Vec<CellValue> {
        self.columns
            .iter()
            .map(|column| column.cells[index].clone())
            .collect()
    }

    /// Keep only the rows whose flag in `keep` is set, preserving order.
    pub fn retain_rows(&mut self, keep: &[bool]) {
        for column in &mut self.columns {
            let mut index = 0;
            column.cells.retain(|_| {
                let kept = keep[index];
                index += 1;
                kept
            });
        }
    }

    /// First `limit` rows rendered as strings, for UI previews
    pub fn preview(&self, limit: usize) -> Vec<Vec<String>> {
        let count = self.row_count().min(limit);
        (0..count)
            .map(|index| {
                self.columns
                    .iter()
                    .map(|column| column.cells[index].render())
                    .collect()
            })
            .collect()
    }
}

/// Trim headers, name blank ones positionally, and disambiguate
/// duplicates with a numeric suffix so the unique-name invariant holds.
fn unique_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique = Vec::with_capacity(headers.len());

    for (index, header) in headers.into_iter().enumerate() {
        let trimmed = header.trim();
        let base = if trimmed.is_empty() {
            format!("column_{}", index + 1)
        } else {
            trimmed.to_string()
        };

        let mut candidate = base.clone();
        let mut suffix = 1;
        while !seen.insert(candidate.clone()) {
            suffix += 1;
            candidate = format!("{}_{}", base, suffix);
        }
        unique.push(candidate);
    }

    unique
}
