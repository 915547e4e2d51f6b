/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Structured error type for table construction and column lookup.
//!
//! Every variant names the column involved so the caller can log it without
//! re-deriving which input was at fault.

use thiserror::Error;

/// Failure while building a [`Table`](super::Table) or reading one of its
/// columns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A column's length differs from the first column's length.
    ///
    /// The builder never truncates or pads; unequal columns are rejected.
    #[error("column '{column}' has {found} row(s), expected {expected}")]
    ShapeMismatch {
        column: String,
        expected: usize,
        found: usize,
    },

    /// The same column name was added twice.
    #[error("column '{0}' is defined more than once")]
    DuplicateColumn(String),

    /// The builder had no columns, or the columns had no rows.
    #[error("table has no rows")]
    Empty,

    /// A lookup named a column the table does not have.
    #[error("table has no column named '{0}'")]
    MissingColumn(String),

    /// The column exists but holds the other kind of data.
    #[error("column '{column}' does not hold {expected}")]
    ColumnKind {
        column: String,
        expected: &'static str,
    },

    /// A chart was asked to plot no value columns at all.
    #[error("no value columns selected")]
    NoSeries,

    /// An independent-variable column is not strictly increasing.
    ///
    /// `index` is the first row whose value is not greater than the row
    /// before it.
    #[error("column '{column}' must be strictly increasing (row {index} breaks the order)")]
    NotStrictlyIncreasing { column: String, index: usize },
}
