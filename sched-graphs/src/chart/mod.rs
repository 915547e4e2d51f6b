/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Chart renderers.
//!
//! Each chart is built from a [`Table`](crate::table::Table), computes a
//! plain-data layout (what bars / points / legend entries will be drawn) and
//! then draws that layout with `plotters` onto any backend:
//!
//! ```text
//! Table ──► GroupedBarChart / LineChart ──► layout() ──► draw(&DrawingArea)
//!                                              ↑ testable      ↑ file or buffer
//! ```
//!
//! Axis scaling, tick placement and rasterisation are left to `plotters`.

pub mod bar;
pub mod line;
pub mod style;

pub use bar::{BarLayout, GroupedBarChart};
pub use line::{LineChart, LineLayout};
pub use style::CanvasSize;

use plotters::coord::Shift;
use plotters::prelude::{DrawingArea, DrawingBackend};

use crate::error::ReportError;

// ── Labels ────────────────────────────────────────────────────────────────────

/// Title and axis descriptions of one chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartLabels {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
}

impl ChartLabels {
    pub fn new(title: &str, x_desc: &str, y_desc: &str) -> Self {
        Self {
            title: title.to_string(),
            x_desc: x_desc.to_string(),
            y_desc: y_desc.to_string(),
        }
    }

    /// Labels of the per-policy waiting / turnaround bar chart.
    pub fn performance() -> Self {
        Self::new(
            "Average Waiting & Turnaround Times by Scheduler",
            "Scheduling Policy",
            "Ticks",
        )
    }

    /// Labels of the aging-interval sweep line chart.
    pub fn sensitivity() -> Self {
        Self::new(
            "MLFQ Aging Interval Sensitivity",
            "Aging Interval (ticks)",
            "Avg Waiting Time (ticks)",
        )
    }
}

// ── Chart trait ───────────────────────────────────────────────────────────────

/// A chart that can draw itself onto a `plotters` drawing area.
pub trait Chart {
    fn title(&self) -> &str;

    /// Fills `root` with the complete chart (background, caption, axes,
    /// series, legend).  Does not present the backend; the caller decides
    /// where the pixels go.
    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), ReportError>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static;
}

/// Canvas dimensions of an already created drawing area.
pub(crate) fn canvas_of<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>) -> CanvasSize {
    let (width, height) = root.dim_in_pixel();
    CanvasSize { width, height }
}
