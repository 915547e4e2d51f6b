/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! sched-graphs – scheduler report charts
//!
//! Module layout:
//!
//! ```text
//! lib.rs
//! ├── config/     – report settings + optional YAML report file
//! ├── table/      – column tables, shape validation, the two datasets
//! ├── chart/      – grouped bar chart, line chart, shared style / auto-fit
//! ├── sink        – PNG output + display hook
//! ├── report      – the two pipelines, run in order
//! └── error       – ReportError
//! ```

pub mod chart;
pub mod config;
pub mod error;
pub mod report;
pub mod sink;
pub mod table;

pub use error::ReportError;
