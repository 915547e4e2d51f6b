/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Report configuration: output location, canvas size and chart data.
//!
//! Everything has a built-in default, so a run with no report file charts the
//! stock dataset into `output_graphs/`.  The optional YAML report file
//! overrides any subset of fields:
//! ```yaml
//! output_dir: output_graphs
//! canvas:
//!   width: 640
//!   height: 480
//! performance:
//!   policies: [Default, FCFS, Lottery, MLFQ, PBS]
//!   avg_waiting_time: [48, 64, 53, 39, 41]
//!   avg_turnaround_time: [26, 30, 27, 24, 25]
//! sensitivity:
//!   aging_interval: [10, 20, 30, 40, 50]
//!   avg_waiting_time: [45, 42, 39, 36, 34]
//! ```
//!
//! Column lengths are not checked here; the table builder rejects mismatches
//! when the report runs.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

use crate::chart::CanvasSize;
use crate::table::{PerformanceData, SensitivityData};

// ── Constants ─────────────────────────────────────────────────────────────────

pub const DEFAULT_OUTPUT_DIR: &str = "output_graphs";
pub const PERFORMANCE_FILE: &str = "performance_graph.png";
pub const SENSITIVITY_FILE: &str = "parameter_sensitivity.png";

// ── Private YAML deserialization types ────────────────────────────────────────

/// Top-level wrapper that maps directly onto the YAML file layout.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ReportFile {
    output_dir: Option<PathBuf>,
    canvas: Option<CanvasEntry>,
    performance: Option<PerformanceEntry>,
    sensitivity: Option<SensitivityEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CanvasEntry {
    width: Option<u32>,
    height: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PerformanceEntry {
    policies: Option<Vec<String>>,
    avg_waiting_time: Option<Vec<i64>>,
    avg_turnaround_time: Option<Vec<i64>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SensitivityEntry {
    aging_interval: Option<Vec<i64>>,
    avg_waiting_time: Option<Vec<i64>>,
}

// ── ReportConfig ──────────────────────────────────────────────────────────────

/// Everything one report run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Directory that receives both PNG files.  Must already exist unless the
    /// caller creates it.
    pub output_dir: PathBuf,
    pub canvas: CanvasSize,
    pub performance: PerformanceData,
    pub sensitivity: SensitivityData,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            canvas: CanvasSize::default(),
            performance: PerformanceData::default(),
            sensitivity: SensitivityData::default(),
        }
    }
}

impl ReportConfig {
    /// Reads `path` and layers its fields over the defaults.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, the YAML is invalid or has
    /// unknown keys, or a canvas dimension is zero.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading report configuration from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot open report file: {}", path.display()))?;

        Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid report file: {}", path.display()))
    }

    /// Parses a YAML report document.  An empty document yields the defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let file: ReportFile = if content.trim().is_empty() {
            ReportFile::default()
        } else {
            serde_yaml::from_str(content).context("Failed to parse YAML")?
        };

        let mut config = Self::default();

        if let Some(dir) = file.output_dir {
            config.output_dir = dir;
        }

        if let Some(canvas) = file.canvas {
            config.canvas.width = canvas.width.unwrap_or(config.canvas.width);
            config.canvas.height = canvas.height.unwrap_or(config.canvas.height);
            if config.canvas.width == 0 || config.canvas.height == 0 {
                bail!(
                    "canvas must be at least 1x1 pixels, got {}x{}",
                    config.canvas.width,
                    config.canvas.height
                );
            }
        }

        if let Some(perf) = file.performance {
            let data = &mut config.performance;
            if let Some(v) = perf.policies {
                data.policies = v;
            }
            if let Some(v) = perf.avg_waiting_time {
                data.avg_waiting_time = v;
            }
            if let Some(v) = perf.avg_turnaround_time {
                data.avg_turnaround_time = v;
            }
        }

        if let Some(sens) = file.sensitivity {
            let data = &mut config.sensitivity;
            if let Some(v) = sens.aging_interval {
                data.aging_interval = v;
            }
            if let Some(v) = sens.avg_waiting_time {
                data.avg_waiting_time = v;
            }
        }

        debug!(
            output_dir = %config.output_dir.display(),
            width = config.canvas.width,
            height = config.canvas.height,
            policies = config.performance.policies.len(),
            sweep_points = config.sensitivity.aging_interval.len(),
            "Report configuration resolved"
        );

        Ok(config)
    }

    /// Destination of the bar chart.
    pub fn performance_path(&self) -> PathBuf {
        self.output_dir.join(PERFORMANCE_FILE)
    }

    /// Destination of the line chart.
    pub fn sensitivity_path(&self) -> PathBuf {
        self.output_dir.join(SENSITIVITY_FILE)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
