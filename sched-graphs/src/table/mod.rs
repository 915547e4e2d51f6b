/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Small column-oriented tables feeding the chart renderers.
//!
//! A [`Table`] is an ordered list of named columns of equal length; row *i*
//! across every column describes one record.  Tables are built once through
//! [`TableBuilder`], never mutated, and dropped after their chart is saved.
//!
//! ```rust
//! use sched_graphs::table::TableBuilder;
//!
//! let table = TableBuilder::new()
//!     .labels("Policy", ["FCFS", "MLFQ"])
//!     .values("Avg Waiting Time", [64, 39])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(table.row_count(), 2);
//! assert_eq!(table.values("Avg Waiting Time").unwrap(), &[64, 39]);
//! ```

pub mod dataset;
pub mod error;

pub use dataset::{PerformanceData, SensitivityData};
pub use error::TableError;

use tracing::debug;

// ── Column ────────────────────────────────────────────────────────────────────

/// Data held by one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Column {
    /// Category labels (e.g. policy names).
    Labels(Vec<String>),
    /// Integer measurements (e.g. ticks).
    Values(Vec<i64>),
}

impl Column {
    /// Number of rows in this column.
    pub fn len(&self) -> usize {
        match self {
            Column::Labels(v) => v.len(),
            Column::Values(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ── Table ─────────────────────────────────────────────────────────────────────

/// Immutable, rectangular table with columns kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<(String, Column)>,
    rows: usize,
}

impl Table {
    /// Number of rows (identical for every column).
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Column names in definition order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Returns the column called `name`.
    pub fn column(&self, name: &str) -> Result<&Column, TableError> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
            .ok_or_else(|| TableError::MissingColumn(name.to_string()))
    }

    /// Returns the label column called `name`.
    ///
    /// # Errors
    /// [`TableError::MissingColumn`] if absent, [`TableError::ColumnKind`] if
    /// the column holds numbers.
    pub fn labels(&self, name: &str) -> Result<&[String], TableError> {
        match self.column(name)? {
            Column::Labels(v) => Ok(v),
            Column::Values(_) => Err(TableError::ColumnKind {
                column: name.to_string(),
                expected: "labels",
            }),
        }
    }

    /// Returns the numeric column called `name`.
    pub fn values(&self, name: &str) -> Result<&[i64], TableError> {
        match self.column(name)? {
            Column::Values(v) => Ok(v),
            Column::Labels(_) => Err(TableError::ColumnKind {
                column: name.to_string(),
                expected: "numeric values",
            }),
        }
    }
}

// ── TableBuilder ──────────────────────────────────────────────────────────────

/// Collects named columns and validates their shape in [`build`](Self::build).
#[derive(Debug, Default)]
pub struct TableBuilder {
    columns: Vec<(String, Column)>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a label column.
    pub fn labels<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.columns.push((name.into(), Column::Labels(values)));
        self
    }

    /// Appends a numeric column.
    pub fn values<I>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        let values = values.into_iter().collect();
        self.columns.push((name.into(), Column::Values(values)));
        self
    }

    /// Validates the collected columns and produces the [`Table`].
    ///
    /// The first column fixes the expected row count.
    ///
    /// # Errors
    /// * [`TableError::Empty`]: no columns, or zero rows.
    /// * [`TableError::DuplicateColumn`]: a name appears twice.
    /// * [`TableError::ShapeMismatch`]: a column's length differs from the
    ///   first column's.
    pub fn build(self) -> Result<Table, TableError> {
        let rows = match self.columns.first() {
            Some((_, first)) => first.len(),
            None => return Err(TableError::Empty),
        };

        for (i, (name, column)) in self.columns.iter().enumerate() {
            if self.columns[..i].iter().any(|(n, _)| n == name) {
                return Err(TableError::DuplicateColumn(name.clone()));
            }
            if column.len() != rows {
                return Err(TableError::ShapeMismatch {
                    column: name.clone(),
                    expected: rows,
                    found: column.len(),
                });
            }
        }

        if rows == 0 {
            return Err(TableError::Empty);
        }

        debug!(rows, columns = self.columns.len(), "Table built");

        Ok(Table {
            columns: self.columns,
            rows,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn two_column_table() -> Table {
        TableBuilder::new()
            .labels("Policy", ["A", "B", "C"])
            .values("Ticks", [3, 2, 1])
            .build()
            .unwrap()
    }

    // ── build ─────────────────────────────────────────────────────────────────

    #[test]
    fn build_keeps_insertion_order() {
        let t = two_column_table();
        assert_eq!(t.column_names(), vec!["Policy", "Ticks"]);
        assert_eq!(t.row_count(), 3);
    }

    #[test]
    fn rows_stay_positionally_aligned() {
        let t = two_column_table();
        let labels = t.labels("Policy").unwrap();
        let ticks = t.values("Ticks").unwrap();
        assert_eq!((labels[1].as_str(), ticks[1]), ("B", 2));
    }

    #[test]
    fn shorter_column_is_a_shape_mismatch() {
        let err = TableBuilder::new()
            .labels("Policy", ["A", "B", "C"])
            .values("Ticks", [1, 2])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            TableError::ShapeMismatch {
                column: "Ticks".into(),
                expected: 3,
                found: 2,
            }
        );
    }

    #[test]
    fn longer_column_is_a_shape_mismatch() {
        let err = TableBuilder::new()
            .values("x", [1])
            .values("y", [1, 2])
            .build()
            .unwrap_err();
        assert!(matches!(err, TableError::ShapeMismatch { found: 2, .. }));
    }

    #[test]
    fn no_columns_is_empty() {
        assert_eq!(TableBuilder::new().build().unwrap_err(), TableError::Empty);
    }

    #[test]
    fn zero_rows_is_empty() {
        let err = TableBuilder::new()
            .values("x", Vec::<i64>::new())
            .build()
            .unwrap_err();
        assert_eq!(err, TableError::Empty);
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let err = TableBuilder::new()
            .values("x", [1])
            .values("x", [2])
            .build()
            .unwrap_err();
        assert_eq!(err, TableError::DuplicateColumn("x".into()));
    }

    #[test]
    fn single_row_table_is_valid() {
        let t = TableBuilder::new()
            .labels("Policy", ["Only"])
            .values("Ticks", [7])
            .build()
            .unwrap();
        assert_eq!(t.row_count(), 1);
    }

    // ── lookup ────────────────────────────────────────────────────────────────

    #[test]
    fn missing_column_lookup_fails() {
        let t = two_column_table();
        assert_eq!(
            t.values("Nope").unwrap_err(),
            TableError::MissingColumn("Nope".into())
        );
    }

    #[test]
    fn wrong_kind_lookup_fails() {
        let t = two_column_table();
        assert!(matches!(
            t.values("Policy").unwrap_err(),
            TableError::ColumnKind { expected: "numeric values", .. }
        ));
        assert!(matches!(
            t.labels("Ticks").unwrap_err(),
            TableError::ColumnKind { expected: "labels", .. }
        ));
    }
}
