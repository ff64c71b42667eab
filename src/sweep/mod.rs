//! Sweep over sizes and cases
//!
//! Each (size, case) pair is independent: a failure is recorded in the
//! report and the sweep moves on. Sequential mode is the default so that
//! timings are not disturbed by other benchmark threads.

mod parallel;

use crate::bench::latency;
use crate::config::Config;
use crate::error::SweepError;
use crate::ops::{self, fixtures, Operation};
use crate::report::{aggregate, CaseResult, Report};
use crate::types::{CaseKind, RunSettings};
use crate::workload::{Spacing, Workload};
use tracing::{debug, info, warn};

const SKIP_EMPTY: &str = "needs a non-empty workload";

pub struct Sweep<'a> {
    operation: &'a dyn Operation,
    sizes: Vec<usize>,
    spacing: Spacing,
    settings: RunSettings,
}

impl<'a> Sweep<'a> {
    /// Sizes are swept ascending, duplicates removed.
    pub fn new(
        operation: &'a dyn Operation,
        sizes: &[usize],
        spacing: Spacing,
        settings: RunSettings,
    ) -> Self {
        let mut sizes = sizes.to_vec();
        sizes.sort_unstable();
        sizes.dedup();

        Self {
            operation,
            sizes,
            spacing,
            settings,
        }
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Run every (size, case) pair on the calling thread.
    pub fn run(&self) -> Report {
        let mut report = Report::new(self.operation.name(), self.settings);

        for &size in &self.sizes {
            // Only one workload is alive at a time.
            let Some(workload) = self.generate(size, &mut report) else {
                continue;
            };

            info!(operation = self.operation.name(), size, "benchmarking size");
            for kind in CaseKind::ALL {
                let result = run_case(self.operation, &workload, kind, self.settings);
                report.record(size, kind, result);
            }
        }

        report
    }

    /// Run the sweep on `workers` threads. Workloads are generated up front
    /// on the calling thread and shared read-only.
    pub fn run_parallel(&self, workers: usize) -> Result<Report, SweepError> {
        parallel::run(self, workers)
    }

    /// Build the workload for `size`, recording a size-level failure on error.
    fn generate(&self, size: usize, report: &mut Report) -> Option<Workload> {
        match Workload::generate(size, self.spacing, self.operation.layout()) {
            Ok(workload) => Some(workload),
            Err(e) => {
                warn!(size, "skipping size: {}", e);
                report.record_size_failure(size, e.to_string());
                None
            }
        }
    }
}

/// Time one case and fold the samples into a result.
fn run_case(
    operation: &dyn Operation,
    workload: &Workload,
    kind: CaseKind,
    settings: RunSettings,
) -> CaseResult {
    let Some(case) = workload.case(kind) else {
        debug!(size = workload.len(), case = %kind, "case skipped");
        return CaseResult::Skipped {
            reason: SKIP_EMPTY.to_string(),
        };
    };

    match latency::run(operation, workload, &case, settings) {
        Ok(samples) => match aggregate(&samples, workload.len()) {
            Some(stats) => {
                debug!(
                    size = workload.len(),
                    case = %kind,
                    mean_ns = stats.mean_ns,
                    "case measured"
                );
                CaseResult::Measured(stats)
            }
            None => CaseResult::Skipped {
                reason: "no iterations".to_string(),
            },
        },
        Err(e) => {
            warn!(
                operation = operation.name(),
                size = workload.len(),
                case = %kind,
                "case failed: {}",
                e
            );
            CaseResult::Failed {
                error: e.to_string(),
            }
        }
    }
}

/// Validate `config`, self-check the selected operation, then sweep.
pub fn run(config: &Config) -> Result<Report, SweepError> {
    config.validate()?;

    let operation = ops::build(config.operation);
    let failures = if config.self_check {
        fixtures::self_check(operation.as_ref())
    } else {
        Vec::new()
    };
    if !failures.is_empty() {
        warn!(
            operation = operation.name(),
            failed = failures.len(),
            "operation failed its self-check"
        );
    }

    let sweep = Sweep::new(
        operation.as_ref(),
        &config.sizes,
        config.spacing,
        config.run_settings(),
    );
    info!(
        operation = operation.name(),
        sizes = ?sweep.sizes(),
        iterations = config.iterations,
        warmup = config.warmup,
        parallel = config.parallel.enabled,
        "starting sweep"
    );

    let mut report = if config.parallel.enabled {
        sweep.run_parallel(config.parallel.workers)?
    } else {
        sweep.run()
    };
    report.record_self_check(failures);

    Ok(report)
}
