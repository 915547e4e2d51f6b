/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Output sink: renders a [`Chart`] to a PNG file.
//!
//! # Lifecycle
//! ```text
//! tempfile in dest dir ──► BitMapBackend ──► draw ──► present ──► rename onto dest
//!          ↑ WriteFailure             ↑ Render       ↑ WriteFailure  ↑ WriteFailure
//! ```
//!
//! The backend is scoped to [`save_png`] and dropped on every path.  The
//! temporary file is deleted when dropped, so a failed run never leaves a
//! partial image at the destination.

use std::fs::Permissions;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use tracing::{debug, info};

use crate::chart::{CanvasSize, Chart};
use crate::error::ReportError;

// ── SavedChart ────────────────────────────────────────────────────────────────

/// A chart that has been written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedChart {
    pub path: PathBuf,
    pub canvas: CanvasSize,
    pub title: String,
}

impl SavedChart {
    /// Surfaces the saved chart for interactive viewing.
    ///
    /// No display backend is linked in, so this only records the event; it
    /// never fails, including in headless runs.
    pub fn show(&self) {
        debug!(
            path = %self.path.display(),
            "No interactive display attached, skipping show"
        );
    }
}

// ── Sinks ─────────────────────────────────────────────────────────────────────

/// Renders `chart` at `canvas` size and writes it to `path` as PNG,
/// replacing any existing file.
///
/// # Errors
/// * [`ReportError::WriteFailure`] if the parent directory is missing or not
///   writable, or the PNG cannot be encoded or moved into place.
/// * [`ReportError::Render`] if drawing fails; nothing is written then.
pub fn save_png<C: Chart>(
    chart: &C,
    path: &Path,
    canvas: CanvasSize,
) -> Result<SavedChart, ReportError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    // The ".png" suffix selects the encoder inside the bitmap backend.
    let staging = tempfile::Builder::new()
        .prefix(".sched-graphs-")
        .suffix(".png")
        .tempfile_in(dir)
        .map_err(|e| ReportError::write_failure(path, e))?;

    {
        let root = BitMapBackend::new(staging.path(), canvas.into()).into_drawing_area();
        chart.draw(&root)?;
        root.present().map_err(|e| ReportError::write_failure(path, e))?;
    }

    // The staging file is created 0600; the destination gets the mode of the
    // file it replaces, or 0644 for a new file.
    if let Some(perms) = output_permissions(path) {
        staging
            .as_file()
            .set_permissions(perms)
            .map_err(|e| ReportError::write_failure(path, e))?;
    }

    staging
        .persist(path)
        .map_err(|e| ReportError::write_failure(path, e.error))?;

    info!(
        path = %path.display(),
        width = canvas.width,
        height = canvas.height,
        "Chart saved"
    );

    Ok(SavedChart {
        path: path.to_path_buf(),
        canvas,
        title: chart.title().to_string(),
    })
}

#[cfg(unix)]
fn output_permissions(path: &Path) -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;

    let existing = std::fs::metadata(path).ok().filter(|m| m.is_file());
    Some(match existing {
        Some(meta) => meta.permissions(),
        None => Permissions::from_mode(0o644),
    })
}

#[cfg(not(unix))]
fn output_permissions(_path: &Path) -> Option<Permissions> {
    None
}

/// Renders `chart` into an in-memory RGB buffer (3 bytes per pixel,
/// row-major).
pub fn render_rgb<C: Chart>(chart: &C, canvas: CanvasSize) -> Result<Vec<u8>, ReportError> {
    let mut buffer = vec![0u8; canvas.width as usize * canvas.height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, canvas.into()).into_drawing_area();
        chart.draw(&root)?;
        root.present()?;
    }
    Ok(buffer)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{GroupedBarChart, LineChart};
    use crate::table::{PerformanceData, SensitivityData};

    fn bar_chart() -> GroupedBarChart {
        GroupedBarChart::performance(&PerformanceData::default().to_table().unwrap()).unwrap()
    }

    fn line_chart() -> LineChart {
        LineChart::sensitivity(&SensitivityData::default().to_table().unwrap()).unwrap()
    }

    /// PNG files start with this 8-byte signature.
    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    // ── save_png ──────────────────────────────────────────────────────────────

    #[test]
    fn bar_chart_is_written_as_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("performance_graph.png");

        let saved = save_png(&bar_chart(), &path, CanvasSize::default()).unwrap();

        assert_eq!(saved.path, path);
        assert_eq!(saved.title, "Average Waiting & Turnaround Times by Scheduler");
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes[..8], PNG_MAGIC);
    }

    #[test]
    fn existing_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("parameter_sensitivity.png");
        std::fs::write(&path, b"stale").unwrap();

        save_png(&line_chart(), &path, CanvasSize::default()).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes[..8], PNG_MAGIC);
    }

    #[test]
    fn missing_directory_is_a_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("chart.png");

        let err = save_png(&bar_chart(), &path, CanvasSize::default()).unwrap_err();

        match err {
            ReportError::WriteFailure { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected WriteFailure, got {other:?}"),
        }
        assert!(!path.exists());
    }

    #[test]
    fn parent_that_is_a_file_is_a_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let not_a_dir = dir.path().join("file.txt");
        std::fs::write(&not_a_dir, b"plain file").unwrap();
        let path = not_a_dir.join("chart.png");

        let err = save_png(&bar_chart(), &path, CanvasSize::default()).unwrap_err();

        assert!(
            matches!(err, ReportError::WriteFailure { .. }),
            "expected WriteFailure, got {err:?}"
        );
        assert!(!path.exists());
        assert_eq!(std::fs::read(&not_a_dir).unwrap(), b"plain file");
    }

    #[cfg(unix)]
    #[test]
    fn new_file_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("performance_graph.png");
        save_png(&bar_chart(), &path, CanvasSize::default()).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644, "got {mode:o}");
    }

    #[cfg(unix)]
    #[test]
    fn overwrite_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("parameter_sensitivity.png");
        std::fs::write(&path, b"stale").unwrap();
        std::fs::set_permissions(&path, Permissions::from_mode(0o664)).unwrap();

        save_png(&line_chart(), &path, CanvasSize::default()).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o664, "got {mode:o}");
    }

    #[test]
    fn staging_file_does_not_linger() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");
        save_png(&bar_chart(), &path, CanvasSize::default()).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("chart.png")]);
    }

    #[test]
    fn show_is_a_no_op() {
        let saved = SavedChart {
            path: PathBuf::from("nowhere.png"),
            canvas: CanvasSize::default(),
            title: "t".into(),
        };
        saved.show();
    }

    // ── render_rgb ────────────────────────────────────────────────────────────

    #[test]
    fn rendering_is_reproducible() {
        let canvas = CanvasSize::default();
        let first = render_rgb(&line_chart(), canvas).unwrap();
        let second = render_rgb(&line_chart(), canvas).unwrap();
        assert_eq!(first.len(), 640 * 480 * 3);
        assert!(first == second, "same chart must render the same pixels");
    }

    #[test]
    fn rendering_draws_something() {
        let pixels = render_rgb(&bar_chart(), CanvasSize::default()).unwrap();
        assert!(pixels.iter().any(|&b| b != 255), "canvas should not be blank");
    }
}
