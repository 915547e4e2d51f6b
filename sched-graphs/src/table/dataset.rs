/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! The two report datasets and their table constructors.
//!
//! The numbers are opaque report input: they are charted as given and never
//! checked against a running scheduler.

use super::{Table, TableBuilder, TableError};

// ── Column names ──────────────────────────────────────────────────────────────

pub const POLICY: &str = "Policy";
pub const AVG_WAITING_TIME: &str = "Avg Waiting Time";
pub const AVG_TURNAROUND_TIME: &str = "Avg Turnaround Time";
pub const AGING_INTERVAL: &str = "Aging Interval";

// ── PerformanceData ───────────────────────────────────────────────────────────

/// Per-policy average waiting / turnaround times, in ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerformanceData {
    pub policies: Vec<String>,
    pub avg_waiting_time: Vec<i64>,
    pub avg_turnaround_time: Vec<i64>,
}

impl Default for PerformanceData {
    fn default() -> Self {
        Self {
            policies: ["Default", "FCFS", "Lottery", "MLFQ", "PBS"]
                .into_iter()
                .map(String::from)
                .collect(),
            avg_waiting_time: vec![48, 64, 53, 39, 41],
            avg_turnaround_time: vec![26, 30, 27, 24, 25],
        }
    }
}

impl PerformanceData {
    /// Builds the `Policy | Avg Waiting Time | Avg Turnaround Time` table.
    pub fn to_table(&self) -> Result<Table, TableError> {
        TableBuilder::new()
            .labels(POLICY, self.policies.iter().cloned())
            .values(AVG_WAITING_TIME, self.avg_waiting_time.iter().copied())
            .values(AVG_TURNAROUND_TIME, self.avg_turnaround_time.iter().copied())
            .build()
    }
}

// ── SensitivityData ───────────────────────────────────────────────────────────

/// MLFQ aging-interval sweep: waiting time as a function of the interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensitivityData {
    pub aging_interval: Vec<i64>,
    pub avg_waiting_time: Vec<i64>,
}

impl Default for SensitivityData {
    fn default() -> Self {
        Self {
            aging_interval: vec![10, 20, 30, 40, 50],
            avg_waiting_time: vec![45, 42, 39, 36, 34],
        }
    }
}

impl SensitivityData {
    /// Builds the `Aging Interval | Avg Waiting Time` table.
    ///
    /// # Errors
    /// Besides the builder's shape errors, returns
    /// [`TableError::NotStrictlyIncreasing`] when the interval column has a
    /// repeated or descending value; the line plot needs sorted, unique x.
    pub fn to_table(&self) -> Result<Table, TableError> {
        let table = TableBuilder::new()
            .values(AGING_INTERVAL, self.aging_interval.iter().copied())
            .values(AVG_WAITING_TIME, self.avg_waiting_time.iter().copied())
            .build()?;

        ensure_strictly_increasing(AGING_INTERVAL, table.values(AGING_INTERVAL)?)?;
        Ok(table)
    }
}

fn ensure_strictly_increasing(column: &str, values: &[i64]) -> Result<(), TableError> {
    match values.windows(2).position(|w| w[1] <= w[0]) {
        Some(i) => Err(TableError::NotStrictlyIncreasing {
            column: column.to_string(),
            index: i + 1,
        }),
        None => Ok(()),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
