/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Top-level error type for one report run.
//!
//! | Variant | Raised by |
//! |---|---|
//! | `Table` | table construction / column lookup |
//! | `Render` | any `plotters` drawing call |
//! | `WriteFailure` | output sink (missing or unwritable directory, encode, rename) |
//!
//! Nothing is retried: the first error aborts the run.

use std::path::PathBuf;

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

use crate::table::TableError;

/// Boxed source error carried unchanged from the rendering library or the
/// filesystem.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum ReportError {
    /// The input columns do not form a valid table.
    #[error(transparent)]
    Table(#[from] TableError),

    /// The rendering library failed while drawing; its error is kept as is.
    #[error("chart rendering failed: {0}")]
    Render(#[source] BoxError),

    /// The chart could not be written to its destination.
    #[error("cannot write chart to '{}'", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: BoxError,
    },
}

impl ReportError {
    pub(crate) fn write_failure(path: impl Into<PathBuf>, source: impl Into<BoxError>) -> Self {
        ReportError::WriteFailure {
            path: path.into(),
            source: source.into(),
        }
    }
}

impl<E> From<DrawingAreaErrorKind<E>> for ReportError
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        ReportError::Render(Box::new(e))
    }
}
