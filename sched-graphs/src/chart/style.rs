/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Canvas size, colours, fonts and the label-area auto-fit shared by both
//! charts.

use plotters::style::RGBColor;

// ── Canvas ────────────────────────────────────────────────────────────────────

/// Pixel dimensions of the output image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
        }
    }
}

impl From<CanvasSize> for (u32, u32) {
    fn from(c: CanvasSize) -> Self {
        (c.width, c.height)
    }
}

// ── Style constants ───────────────────────────────────────────────────────────

pub const FONT_FAMILY: &str = "sans-serif";
pub const LABEL_FONT_PX: u32 = 14;
pub const MARGIN_PX: u32 = 12;

/// Series colours, cycled by series index.
pub const PALETTE: [RGBColor; 4] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
];

pub fn series_color(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}

/// Caption font size, scaled to the canvas height (20 px at 480 px high).
pub fn caption_font_px(canvas: CanvasSize) -> u32 {
    (canvas.height / 24).clamp(12, 40)
}

// ── Auto-fit ──────────────────────────────────────────────────────────────────

/// Average glyph advance relative to the font size for a sans-serif face.
const GLYPH_WIDTH_RATIO: f64 = 0.6;

/// Width of the y label area: widest tick label, then the rotated axis
/// description, plus tick and padding space.
///
/// Plotters draws tick labels and the axis description inside the same label
/// area, so an undersized area clips the description.
pub fn fit_label_area<S: AsRef<str>>(tick_labels: &[S], font_px: u32) -> u32 {
    let widest = tick_labels
        .iter()
        .map(|l| l.as_ref().chars().count())
        .max()
        .unwrap_or(1);
    let text_px = (widest as f64 * font_px as f64 * GLYPH_WIDTH_RATIO).ceil() as u32;
    text_px + font_px + 2 * MARGIN_PX
}

/// Height of the x label area: one row of tick labels and one row for the
/// axis description.
pub fn fit_x_label_area(font_px: u32) -> u32 {
    2 * font_px + 2 * MARGIN_PX
}

/// Formats a tick value without a fractional part when it is whole.
pub fn format_tick(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{:.0}", v)
    } else {
        format!("{:.1}", v)
    }
}

/// Expands `[lo, hi]` by 5 % of its span on both sides.  A zero span is
/// widened by one unit each way so single points stay inside the plot.
pub fn padded_range(lo: f64, hi: f64) -> (f64, f64) {
    let span = hi - lo;
    if span.abs() < f64::EPSILON {
        (lo - 1.0, hi + 1.0)
    } else {
        (lo - span * 0.05, hi + span * 0.05)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
