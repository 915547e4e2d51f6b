/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use sched_graphs::config::ReportConfig;
use sched_graphs::report;

// ── CLI argument definition ───────────────────────────────────────────────────

/// Renders the scheduler performance and aging-sensitivity charts to PNG.
///
/// Example:
///   sched-graphs
///   sched-graphs -o /mnt/data --config report.yaml
#[derive(Debug, Parser)]
#[command(
    name = "sched-graphs",
    about = "Scheduler report charts – performance and aging sensitivity",
    long_about = None,
)]
struct Cli {
    /// Path to a YAML report file overriding the built-in data and canvas.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Directory receiving performance_graph.png and parameter_sensitivity.png.
    #[arg(short = 'o', long = "output-dir")]
    output_dir: Option<PathBuf>,

    /// Create the output directory if it does not exist.
    #[arg(long = "create-dir", default_value_t = false)]
    create_dir: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Level is controlled by the RUST_LOG env-var (e.g. RUST_LOG=debug).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    info!(
        config     = ?cli.config,
        output_dir = ?cli.output_dir,
        create_dir = cli.create_dir,
        "Configuration"
    );

    if let Err(e) = run(&cli) {
        error!("Report generation failed: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => ReportConfig::load_from_file(path)?,
        None => ReportConfig::default(),
    };

    if let Some(dir) = &cli.output_dir {
        config.output_dir = dir.clone();
    }

    if cli.create_dir {
        std::fs::create_dir_all(&config.output_dir).with_context(|| {
            format!(
                "Cannot create output directory: {}",
                config.output_dir.display()
            )
        })?;
    }

    let saved = report::generate(&config)?;

    info!("Wrote {} chart(s):", saved.len());
    for chart in &saved {
        info!(
            "  [{title}]  {path}  {w}x{h}",
            title = chart.title,
            path = chart.path.display(),
            w = chart.canvas.width,
            h = chart.canvas.height,
        );
    }

    Ok(())
}
