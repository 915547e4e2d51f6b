/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Grouped bar chart: one group per category, one bar per value column.
//!
//! Category *i* is centred on x = *i*.  The bars of a group share a total
//! width of [`GROUP_WIDTH`] and sit side by side in value-column order, so the
//! legend order matches the left-to-right bar order.

use plotters::coord::combinators::BindKeyPoints;
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::debug;

use super::style::{
    caption_font_px, fit_label_area, fit_x_label_area, format_tick, series_color, FONT_FAMILY,
    LABEL_FONT_PX, MARGIN_PX,
};
use super::{canvas_of, Chart, ChartLabels};
use crate::error::ReportError;
use crate::table::dataset::{AVG_TURNAROUND_TIME, AVG_WAITING_TIME, POLICY};
use crate::table::{Table, TableError};

/// Combined width of all bars in one group, in category units.
pub const GROUP_WIDTH: f64 = 0.5;

// ── Layout ────────────────────────────────────────────────────────────────────

/// One bar, in data coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// Index of the value column (and legend entry) this bar belongs to.
    pub series: usize,
    pub x0: f64,
    pub x1: f64,
    pub value: i64,
}

/// All bars drawn at one category position.
#[derive(Debug, Clone, PartialEq)]
pub struct BarGroup {
    pub category: String,
    pub center: f64,
    pub bars: Vec<Bar>,
}

/// What the grouped bar chart will draw.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub groups: Vec<BarGroup>,
    /// Legend entries, one per value column, in column order.
    pub legend: Vec<String>,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

impl BarLayout {
    /// X positions that get a tick mark and label: one per category centre.
    pub fn category_ticks(&self) -> Vec<f64> {
        self.groups.iter().map(|g| g.center).collect()
    }
}

// ── GroupedBarChart ───────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct BarSeries {
    name: String,
    values: Vec<i64>,
}

/// Grouped bar chart over one label column and one or more value columns.
#[derive(Debug, Clone)]
pub struct GroupedBarChart {
    labels: ChartLabels,
    categories: Vec<String>,
    series: Vec<BarSeries>,
}

impl GroupedBarChart {
    /// Selects `category` as the x positions and each of `value_columns` as a
    /// bar series.  The table is only read.
    ///
    /// # Errors
    /// [`TableError::NoSeries`] when `value_columns` is empty, or the lookup
    /// errors of [`Table::labels`] / [`Table::values`].
    pub fn from_table(
        table: &Table,
        category: &str,
        value_columns: &[&str],
        labels: ChartLabels,
    ) -> Result<Self, TableError> {
        if value_columns.is_empty() {
            return Err(TableError::NoSeries);
        }

        let categories = table.labels(category)?.to_vec();
        let series = value_columns
            .iter()
            .map(|&name| {
                Ok(BarSeries {
                    name: name.to_string(),
                    values: table.values(name)?.to_vec(),
                })
            })
            .collect::<Result<Vec<_>, TableError>>()?;

        Ok(Self {
            labels,
            categories,
            series,
        })
    }

    /// The waiting / turnaround chart over a performance table.
    pub fn performance(table: &Table) -> Result<Self, TableError> {
        Self::from_table(
            table,
            POLICY,
            &[AVG_WAITING_TIME, AVG_TURNAROUND_TIME],
            ChartLabels::performance(),
        )
    }

    pub fn labels(&self) -> &ChartLabels {
        &self.labels
    }

    /// Computes bar positions, legend and axis ranges.
    pub fn layout(&self) -> BarLayout {
        let n_series = self.series.len();
        let bar_width = GROUP_WIDTH / n_series as f64;

        let groups = self
            .categories
            .iter()
            .enumerate()
            .map(|(row, category)| {
                let center = row as f64;
                let left = center - GROUP_WIDTH / 2.0;
                let bars = self
                    .series
                    .iter()
                    .enumerate()
                    .map(|(s, series)| Bar {
                        series: s,
                        x0: left + s as f64 * bar_width,
                        x1: left + (s + 1) as f64 * bar_width,
                        value: series.values[row],
                    })
                    .collect();
                BarGroup {
                    category: category.clone(),
                    center,
                    bars,
                }
            })
            .collect();

        BarLayout {
            groups,
            legend: self.series.iter().map(|s| s.name.clone()).collect(),
            x_range: (-0.5, self.categories.len() as f64 - 0.5),
            y_range: self.value_range(),
        }
    }

    /// Bars grow from zero, so zero is always inside the range; only the side
    /// away from zero gets a 5 % margin.
    fn value_range(&self) -> (f64, f64) {
        let values = self.series.iter().flat_map(|s| s.values.iter().copied());
        let lo = values.clone().min().unwrap_or(0).min(0) as f64;
        let hi = values.max().unwrap_or(0).max(0) as f64;

        let span = hi - lo;
        if span == 0.0 {
            return (0.0, 1.0);
        }
        let lo = if lo < 0.0 { lo - span * 0.05 } else { lo };
        let hi = if hi > 0.0 { hi + span * 0.05 } else { hi };
        (lo, hi)
    }
}

/// Category whose centre is `x`, if `x` sits exactly on one.
fn category_at(categories: &[String], x: f64) -> Option<&str> {
    let rounded = x.round();
    if (x - rounded).abs() > 1e-6 || rounded < 0.0 {
        return None;
    }
    categories.get(rounded as usize).map(String::as_str)
}

impl Chart for GroupedBarChart {
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

        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(root)
            .caption(
                &self.labels.title,
                (FONT_FAMILY, caption_font_px(canvas_of(root))),
            )
            .margin(MARGIN_PX)
            .x_label_area_size(fit_x_label_area(LABEL_FONT_PX))
            .y_label_area_size(fit_label_area(&y_ticks, LABEL_FONT_PX))
            .build_cartesian_2d(
                (x_lo..x_hi).with_key_points(layout.category_ticks()),
                y_lo..y_hi,
            )?;

        let x_formatter = |x: &f64| {
            category_at(&self.categories, *x)
                .unwrap_or_default()
                .to_string()
        };

        // Ticks sit on the category centres only.
        chart
            .configure_mesh()
            .disable_x_mesh()
            .light_line_style(WHITE)
            .x_labels(self.categories.len())
            .x_label_formatter(&x_formatter)
            .y_label_formatter(&|y| format_tick(*y))
            .x_desc(self.labels.x_desc.as_str())
            .y_desc(self.labels.y_desc.as_str())
            .label_style((FONT_FAMILY, LABEL_FONT_PX))
            .axis_desc_style((FONT_FAMILY, LABEL_FONT_PX))
            .draw()?;

        for (index, name) in layout.legend.iter().enumerate() {
            let color = series_color(index);
            let bars = layout
                .groups
                .iter()
                .flat_map(|g| g.bars.iter())
                .filter(|b| b.series == index)
                .map(|b| {
                    Rectangle::new([(b.x0, 0.0), (b.x1, b.value as f64)], color.filled())
                });

            chart
                .draw_series(bars)?
                .label(name.as_str())
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
                });
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font((FONT_FAMILY, LABEL_FONT_PX))
            .draw()?;

        debug!(
            title = %self.labels.title,
            groups = layout.groups.len(),
            series = layout.legend.len(),
            "Bar chart drawn"
        );
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
