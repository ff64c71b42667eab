//! Aggregated results and rendering
//!
//! A [`Report`] is keyed by size and case kind, so rendering order is
//! sizes ascending then first, middle, last, absent, whatever order the
//! results were recorded in.

pub mod aggregate;

pub use aggregate::{aggregate, Stats};

use crate::ops::fixtures::FixtureFailure;
use crate::types::{CaseKind, RunSettings};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaseResult {
    Measured(Stats),
    Skipped { reason: String },
    Failed { error: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SizeReport {
    /// Set when the workload for this size could not be built.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub cases: BTreeMap<CaseKind, CaseResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub operation: String,
    pub iterations: u32,
    pub warmup: u32,
    pub self_check: Vec<FixtureFailure>,
    pub sizes: BTreeMap<usize, SizeReport>,
}

impl Report {
    pub fn new(operation: &str, settings: RunSettings) -> Self {
        Self {
            operation: operation.to_string(),
            iterations: settings.iterations,
            warmup: settings.warmup,
            self_check: Vec::new(),
            sizes: BTreeMap::new(),
        }
    }

    pub fn record(&mut self, size: usize, kind: CaseKind, result: CaseResult) {
        self.sizes.entry(size).or_default().cases.insert(kind, result);
    }

    pub fn record_size_failure(&mut self, size: usize, error: String) {
        self.sizes.entry(size).or_default().error = Some(error);
    }

    pub fn record_self_check(&mut self, failures: Vec<FixtureFailure>) {
        self.self_check = failures;
    }

    pub fn get(&self, size: usize, kind: CaseKind) -> Option<&CaseResult> {
        self.sizes.get(&size)?.cases.get(&kind)
    }

    /// Number of (size, case) pairs that produced timings.
    pub fn measured_count(&self) -> usize {
        self.sizes
            .values()
            .flat_map(|s| s.cases.values())
            .filter(|r| matches!(r, CaseResult::Measured(_)))
            .count()
    }

    /// True if any fixture, size or case failed. Skipped cases are not failures.
    pub fn has_failures(&self) -> bool {
        !self.self_check.is_empty()
            || self.sizes.values().any(|s| {
                s.error.is_some()
                    || s.cases
                        .values()
                        .any(|r| matches!(r, CaseResult::Failed { .. }))
            })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Nanoseconds as seconds with 6 decimals, rounded without floats.
fn format_seconds(ns: u64) -> String {
    let micros = (u128::from(ns) + 500) / 1000;
    format!("{}.{:06}", micros / 1_000_000, micros % 1_000_000)
}

fn format_ps_as_ns(ps: u64) -> String {
    format!("{}.{:03}", ps / 1000, ps % 1000)
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} ({} iterations, {} warm-up)",
            self.operation, self.iterations, self.warmup
        )?;

        if !self.self_check.is_empty() {
            writeln!(f, "self-check: {} fixture(s) failed", self.self_check.len())?;
            for failure in &self.self_check {
                writeln!(
                    f,
                    "  {}: expected {}, {}",
                    failure.fixture, failure.expected, failure.error
                )?;
            }
        }

        for (size, report) in &self.sizes {
            if let Some(error) = &report.error {
                writeln!(f, "size {}: FAILED {}", size, error)?;
                continue;
            }

            writeln!(f, "size {}", size)?;
            for (kind, result) in &report.cases {
                match result {
                    CaseResult::Measured(stats) => {
                        let per_element = stats
                            .per_element_ps
                            .map(|ps| format!("{} ns", format_ps_as_ns(ps)))
                            .unwrap_or_else(|| "n/a".to_string());
                        writeln!(
                            f,
                            "  {:<7} mean {} s ({} ns)  per-element {}  success {}/{} ({:.1}%)",
                            kind,
                            format_seconds(stats.mean_ns),
                            stats.mean_ns,
                            per_element,
                            stats.success_count,
                            stats.iterations,
                            stats.success_rate() * 100.0
                        )?;
                    }
                    CaseResult::Skipped { reason } => {
                        writeln!(f, "  {:<7} skipped ({})", kind, reason)?;
                    }
                    CaseResult::Failed { error } => {
                        writeln!(f, "  {:<7} FAILED {}", kind, error)?;
                    }
                }
            }
        }
        Ok(())
    }
}
