/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! The two report pipelines.
//!
//! Each pipeline runs `Built -> Rendered -> Saved -> Displayed` and nothing
//! else.  They share no state and run one after the other: performance first,
//! sensitivity second.  The first error stops the run; a chart saved before
//! the error stays on disk.

use tracing::info;

use crate::chart::{GroupedBarChart, LineChart};
use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::sink::{save_png, SavedChart};

/// Builds, renders and saves both charts described by `config`.
///
/// Returns the saved charts in the order they were written.
pub fn generate(config: &ReportConfig) -> Result<Vec<SavedChart>, ReportError> {
    let performance = performance_pipeline(config)?;
    let sensitivity = sensitivity_pipeline(config)?;
    Ok(vec![performance, sensitivity])
}

/// Per-policy waiting / turnaround grouped bar chart.
pub fn performance_pipeline(config: &ReportConfig) -> Result<SavedChart, ReportError> {
    let table = config.performance.to_table()?;
    info!(rows = table.row_count(), "Performance table built");

    let chart = GroupedBarChart::performance(&table)?;
    let saved = save_png(&chart, &config.performance_path(), config.canvas)?;
    saved.show();
    Ok(saved)
}

/// Aging-interval sweep line chart.
pub fn sensitivity_pipeline(config: &ReportConfig) -> Result<SavedChart, ReportError> {
    let table = config.sensitivity.to_table()?;
    info!(rows = table.row_count(), "Sensitivity table built");

    let chart = LineChart::sensitivity(&table)?;
    let saved = save_png(&chart, &config.sensitivity_path(), config.canvas)?;
    saved.show();
    Ok(saved)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableError;

    fn config_in(dir: &std::path::Path) -> ReportConfig {
        ReportConfig {
            output_dir: dir.to_path_buf(),
            ..ReportConfig::default()
        }
    }

    #[test]
    fn generate_writes_both_charts_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let saved = generate(&config_in(dir.path())).unwrap();

        let names: Vec<_> = saved
            .iter()
            .map(|s| s.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["performance_graph.png", "parameter_sensitivity.png"]);
        assert!(saved.iter().all(|s| s.path.is_file()));
    }

    #[test]
    fn shape_mismatch_aborts_before_any_file_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = config_in(dir.path());
        cfg.performance.avg_waiting_time.pop();

        let err = generate(&cfg).unwrap_err();

        assert!(matches!(
            err,
            ReportError::Table(TableError::ShapeMismatch { .. })
        ));
        assert!(!cfg.performance_path().exists());
        assert!(!cfg.sensitivity_path().exists());
    }

    #[test]
    fn failure_in_second_pipeline_keeps_the_first_chart() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = config_in(dir.path());
        cfg.sensitivity.aging_interval = vec![50, 40, 30, 20, 10];

        let err = generate(&cfg).unwrap_err();

        assert!(matches!(
            err,
            ReportError::Table(TableError::NotStrictlyIncreasing { .. })
        ));
        assert!(cfg.performance_path().is_file());
        assert!(!cfg.sensitivity_path().exists());
    }

    #[test]
    fn one_row_tables_render() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = config_in(dir.path());
        cfg.performance.policies.truncate(1);
        cfg.performance.avg_waiting_time.truncate(1);
        cfg.performance.avg_turnaround_time.truncate(1);
        cfg.sensitivity.aging_interval.truncate(1);
        cfg.sensitivity.avg_waiting_time.truncate(1);

        assert_eq!(generate(&cfg).unwrap().len(), 2);
    }
}
