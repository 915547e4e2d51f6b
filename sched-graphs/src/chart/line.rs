/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Single-series line chart with a filled circle marker on every point.

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::debug;

use super::style::{
    caption_font_px, fit_label_area, fit_x_label_area, format_tick, padded_range, series_color,
    FONT_FAMILY, LABEL_FONT_PX, MARGIN_PX,
};
use super::{canvas_of, Chart, ChartLabels};
use crate::error::ReportError;
use crate::table::dataset::{AGING_INTERVAL, AVG_WAITING_TIME};
use crate::table::{Table, TableError};

pub const MARKER_RADIUS_PX: u32 = 6;
pub const LINE_WIDTH_PX: u32 = 2;

/// What the line chart will draw.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    /// Vertices of the connected line, in table order.
    pub path: Vec<(f64, f64)>,
    /// Marker centres; one per data point.
    pub markers: Vec<(f64, f64)>,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

/// Line chart of one numeric column against another.
#[derive(Debug, Clone)]
pub struct LineChart {
    labels: ChartLabels,
    points: Vec<(i64, i64)>,
}

impl LineChart {
    /// Pairs `x_column[i]` with `y_column[i]`, keeping table order.
    pub fn from_table(
        table: &Table,
        x_column: &str,
        y_column: &str,
        labels: ChartLabels,
    ) -> Result<Self, TableError> {
        let xs = table.values(x_column)?;
        let ys = table.values(y_column)?;
        let points = xs.iter().copied().zip(ys.iter().copied()).collect();
        Ok(Self { labels, points })
    }

    /// The aging-interval sweep chart over a sensitivity table.
    pub fn sensitivity(table: &Table) -> Result<Self, TableError> {
        Self::from_table(
            table,
            AGING_INTERVAL,
            AVG_WAITING_TIME,
            ChartLabels::sensitivity(),
        )
    }

    pub fn labels(&self) -> &ChartLabels {
        &self.labels
    }

    pub fn layout(&self) -> LineLayout {
        let path: Vec<(f64, f64)> = self
            .points
            .iter()
            .map(|&(x, y)| (x as f64, y as f64))
            .collect();

        let bounds = |pick: fn(&(i64, i64)) -> i64| {
            let lo = self.points.iter().map(pick).min().unwrap_or(0) as f64;
            let hi = self.points.iter().map(pick).max().unwrap_or(0) as f64;
            padded_range(lo, hi)
        };

        LineLayout {
            markers: path.clone(),
            path,
            x_range: bounds(|p| p.0),
            y_range: bounds(|p| p.1),
        }
    }
}

impl Chart for LineChart {
    fn title(&self) -> &str {
        &self.labels.title
    }

    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), ReportError>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let layout = self.layout();
        let (x_lo, x_hi) = layout.x_range;
        let (y_lo, y_hi) = layout.y_range;
        let y_ticks = [format_tick(y_lo), format_tick(y_hi)];
        let color = series_color(0);

        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(root)
            .caption(
                &self.labels.title,
                (FONT_FAMILY, caption_font_px(canvas_of(root))),
            )
            .margin(MARGIN_PX)
            .x_label_area_size(fit_x_label_area(LABEL_FONT_PX))
            .y_label_area_size(fit_label_area(&y_ticks, LABEL_FONT_PX))
            .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

        chart
            .configure_mesh()
            .light_line_style(WHITE)
            .x_label_formatter(&|x| format_tick(*x))
            .y_label_formatter(&|y| format_tick(*y))
            .x_desc(self.labels.x_desc.as_str())
            .y_desc(self.labels.y_desc.as_str())
            .label_style((FONT_FAMILY, LABEL_FONT_PX))
            .axis_desc_style((FONT_FAMILY, LABEL_FONT_PX))
            .draw()?;

        chart.draw_series(LineSeries::new(
            layout.path.iter().copied(),
            color.stroke_width(LINE_WIDTH_PX),
        ))?;

        chart.draw_series(
            layout
                .markers
                .iter()
                .map(|&p| Circle::new(p, MARKER_RADIUS_PX, color.filled())),
        )?;

        debug!(
            title = %self.labels.title,
            points = layout.path.len(),
            "Line chart drawn"
        );
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
