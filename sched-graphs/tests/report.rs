/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! End-to-end runs of the report into temporary directories.

use std::path::Path;

use sched_graphs::config::ReportConfig;
use sched_graphs::report;
use sched_graphs::ReportError;

fn config_in(dir: &Path) -> ReportConfig {
    ReportConfig {
        output_dir: dir.to_path_buf(),
        ..ReportConfig::default()
    }
}

fn png_dimensions(path: &Path) -> (u32, u32) {
    // IHDR is the first chunk: width and height are big-endian u32 at 16..24.
    let bytes = std::fs::read(path).unwrap();
    let width = u32::from_be_bytes(bytes[16..20].try_into().unwrap());
    let height = u32::from_be_bytes(bytes[20..24].try_into().unwrap());
    (width, height)
}

#[test]
fn default_report_writes_two_pngs() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path());

    let saved = report::generate(&cfg).unwrap();

    assert_eq!(saved.len(), 2);
    assert_eq!(png_dimensions(&cfg.performance_path()), (640, 480));
    assert_eq!(png_dimensions(&cfg.sensitivity_path()), (640, 480));
}

#[test]
fn second_run_overwrites_with_identical_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path());

    report::generate(&cfg).unwrap();
    let first = png_dimensions(&cfg.performance_path());
    report::generate(&cfg).unwrap();
    let second = png_dimensions(&cfg.performance_path());

    assert_eq!(first, second);
}

#[test]
fn canvas_from_report_file_is_honoured() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = ReportConfig::from_yaml_str("canvas:\n  width: 800\n  height: 600\n").unwrap();
    cfg.output_dir = dir.path().to_path_buf();

    report::generate(&cfg).unwrap();

    assert_eq!(png_dimensions(&cfg.sensitivity_path()), (800, 600));
}

#[test]
fn missing_output_directory_is_a_write_failure() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(&dir.path().join("does_not_exist"));

    let err = report::generate(&cfg).unwrap_err();

    assert!(
        matches!(err, ReportError::WriteFailure { .. }),
        "expected WriteFailure, got {err:?}"
    );
    assert!(!cfg.performance_path().exists());
    assert!(!cfg.sensitivity_path().exists());
}
