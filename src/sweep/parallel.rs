//! Worker pool for independent (size, case) jobs
//! Results are keyed, so report order never depends on completion order

use std::thread;

use crossbeam_channel::unbounded;
use tracing::{debug, info, warn};

use super::{run_case, Sweep};
use crate::error::SweepError;
use crate::report::{CaseResult, Report};
use crate::types::CaseKind;
use crate::workload::Workload;

struct Job<'w> {
    size: usize,
    kind: CaseKind,
    workload: &'w Workload,
}

pub(super) fn run(sweep: &Sweep<'_>, workers: usize) -> Result<Report, SweepError> {
    let mut report = Report::new(sweep.operation.name(), sweep.settings);

    let workloads: Vec<(usize, Workload)> = sweep
        .sizes
        .iter()
        .filter_map(|&size| sweep.generate(size, &mut report).map(|w| (size, w)))
        .collect();

    let (job_tx, job_rx) = unbounded::<Job<'_>>();
    let (result_tx, result_rx) = unbounded::<(usize, CaseKind, CaseResult)>();

    let mut jobs = 0;
    for (size, workload) in &workloads {
        for kind in CaseKind::ALL {
            // The receiver is alive until the end of this function.
            job_tx
                .send(Job {
                    size: *size,
                    kind,
                    workload,
                })
                .ok();
            jobs += 1;
        }
    }
    drop(job_tx);

    let num_workers = workers.min(jobs).max(1);
    info!("Starting {} benchmark workers for {} jobs", num_workers, jobs);

    let operation = sweep.operation;
    let settings = sweep.settings;

    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(num_workers);

        for worker_id in 0..num_workers {
            let job_rx = job_rx.clone();
            let result_tx = result_tx.clone();

            let handle = thread::Builder::new()
                .name(format!("bench-worker-{}", worker_id))
                .spawn_scoped(scope, move || {
                    for job in job_rx.iter() {
                        debug!(worker_id, size = job.size, case = %job.kind, "job picked up");
                        let result = run_case(operation, job.workload, job.kind, settings);
                        if result_tx.send((job.size, job.kind, result)).is_err() {
                            break;
                        }
                    }
                })
                .map_err(SweepError::Spawn)?;
            handles.push(handle);
        }
        drop(result_tx);

        for (size, kind, result) in result_rx.iter() {
            report.record(size, kind, result);
        }

        // Join every handle so the scope never re-raises a worker panic.
        let panicked = handles
            .into_iter()
            .map(|handle| handle.join())
            .filter(Result::is_err)
            .count();
        if panicked > 0 {
            warn!("{} benchmark worker(s) panicked", panicked);
            return Err(SweepError::WorkerPanic);
        }
        Ok(())
    })?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{BinarySearch, LinkedListSearch};
    use crate::sweep::tests::PanicsOnLast;
    use crate::types::RunSettings;
    use crate::workload::Spacing;

    fn statuses(report: &Report) -> Vec<(usize, CaseKind, &'static str)> {
        report
            .sizes
            .iter()
            .flat_map(|(size, s)| {
                s.cases.iter().map(move |(kind, r)| {
                    let status = match r {
                        CaseResult::Measured(_) => "measured",
                        CaseResult::Skipped { .. } => "skipped",
                        CaseResult::Failed { .. } => "failed",
                    };
                    (*size, *kind, status)
                })
            })
            .collect()
    }

    #[test]
    fn test_parallel_matches_sequential_shape() {
        let settings = RunSettings {
            iterations: 20,
            warmup: 2,
        };
        let sweep = Sweep::new(&BinarySearch, &[0, 10, 1_000, 5_000], Spacing::Even, settings);

        let sequential = sweep.run();
        let parallel = sweep.run_parallel(4).unwrap();

        assert_eq!(statuses(&sequential), statuses(&parallel));
        assert_eq!(parallel.measured_count(), 13);
    }

    #[test]
    fn test_panicking_operation_fails_only_its_cases() {
        let settings = RunSettings {
            iterations: 10,
            warmup: 1,
        };
        let sweep = Sweep::new(&PanicsOnLast, &[4, 8], Spacing::Sequential, settings);

        let report = sweep.run_parallel(2).unwrap();
        assert!(report.has_failures());
        for size in [4, 8] {
            match report.get(size, CaseKind::Last) {
                Some(CaseResult::Failed { error }) => assert!(error.contains("operation panicked")),
                other => panic!("unexpected result {:?}", other),
            }
            for kind in [CaseKind::First, CaseKind::Middle, CaseKind::Absent] {
                assert!(matches!(report.get(size, kind), Some(CaseResult::Measured(_))));
            }
        }
    }

    #[test]
    fn test_more_workers_than_jobs() {
        let settings = RunSettings {
            iterations: 3,
            warmup: 0,
        };
        let sweep = Sweep::new(&LinkedListSearch, &[2], Spacing::Sequential, settings);

        let report = sweep.run_parallel(64).unwrap();
        assert_eq!(report.measured_count(), 4);
    }

    #[test]
    fn test_size_failure_recorded_in_parallel() {
        let settings = RunSettings {
            iterations: 3,
            warmup: 0,
        };
        let sweep = Sweep::new(&BinarySearch, &[3, usize::MAX], Spacing::Sequential, settings);

        let report = sweep.run_parallel(2).unwrap();
        assert!(report.sizes[&usize::MAX].error.is_some());
        assert_eq!(report.sizes[&3].cases.len(), 4);
    }
}
