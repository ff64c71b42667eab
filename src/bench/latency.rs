//! Timed runner
//!
//! All timing goes through [`measure`]: `warmup` untimed calls, then
//! `iterations` calls each timed with [`Instant`], the platform's monotonic
//! clock (nanosecond resolution on Linux, macOS and Windows).

use std::any::Any;
use std::hint::black_box;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;
use tracing::debug;

use crate::error::CaseError;
use crate::ops::Operation;
use crate::types::{Case, Outcome, RunSettings, Sample};
use crate::workload::Workload;

/// Run `op` with warm-up and per-call timing.
///
/// `verify` sees every timed result after its clock has stopped; returning
/// an error aborts the run. Errors from `op` abort the run as well, during
/// warm-up included.
pub fn measure<F, V, E>(settings: RunSettings, mut op: F, mut verify: V) -> Result<Vec<Sample>, E>
where
    F: FnMut() -> Result<Outcome, E>,
    V: FnMut(u32, Outcome) -> Result<(), E>,
{
    // Warmup
    for _ in 0..settings.warmup {
        black_box(op()?);
    }

    let mut samples = Vec::with_capacity(settings.iterations as usize);

    for iteration in 0..settings.iterations {
        let start = Instant::now();
        let outcome = black_box(op());
        let elapsed_ns = u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX);

        let outcome = outcome?;
        verify(iteration, outcome)?;
        samples.push(Sample {
            elapsed_ns,
            outcome,
        });
    }

    Ok(samples)
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Time `operation` against one case of `workload`, checking every outcome.
/// A panic inside the operation fails only this case.
pub fn run(
    operation: &dyn Operation,
    workload: &Workload,
    case: &Case,
    settings: RunSettings,
) -> Result<Vec<Sample>, CaseError> {
    debug!(
        operation = operation.name(),
        size = workload.len(),
        case = %case.kind,
        target = case.target,
        "timing case"
    );

    let target = black_box(case.target);
    measure(
        settings,
        || {
            panic::catch_unwind(AssertUnwindSafe(|| {
                operation.evaluate(black_box(workload), target)
            }))
            .map_err(|payload| CaseError::Panicked(panic_message(payload)))?
            .map_err(CaseError::from)
        },
        |iteration, actual| {
            if actual == case.expected {
                Ok(())
            } else {
                Err(CaseError::Mismatch {
                    expected: case.expected,
                    actual,
                    iteration,
                })
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OperationError;
    use crate::ops::LinearSearch;
    use crate::types::CaseKind;
    use crate::workload::{Layout, Spacing};
    use std::cell::Cell;

    struct OffByOne;

    impl Operation for OffByOne {
        fn name(&self) -> &'static str {
            "off-by-one"
        }

        fn evaluate(&self, workload: &Workload, target: i64) -> Result<Outcome, OperationError> {
            Ok(match LinearSearch.evaluate(workload, target)? {
                Outcome::Found(i) => Outcome::Found(i + 1),
                Outcome::Absent => Outcome::Absent,
            })
        }
    }

    struct Failing;

    impl Operation for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn evaluate(&self, _workload: &Workload, _target: i64) -> Result<Outcome, OperationError> {
            Err(OperationError::Failed {
                operation: "failing",
                reason: "boom".to_string(),
            })
        }
    }

    struct PanicsOnLast;

    impl Operation for PanicsOnLast {
        fn name(&self) -> &'static str {
            "panics-on-last"
        }

        fn evaluate(&self, workload: &Workload, target: i64) -> Result<Outcome, OperationError> {
            if workload.values().last() == Some(&target) {
                panic!("boom");
            }
            LinearSearch.evaluate(workload, target)
        }
    }

    #[test]
    fn test_panic_fails_only_the_case() {
        let w = Workload::generate(8, Spacing::Sequential, Layout::Array).unwrap();

        let last = w.case(CaseKind::Last).unwrap();
        let err = run(&PanicsOnLast, &w, &last, RunSettings::default()).unwrap_err();
        assert_eq!(err, CaseError::Panicked("boom".to_string()));

        let first = w.case(CaseKind::First).unwrap();
        assert_eq!(run(&PanicsOnLast, &w, &first, RunSettings::default()).unwrap().len(), 1000);
    }

    #[test]
    fn test_measure_counts_calls() {
        let calls = Cell::new(0u32);
        let settings = RunSettings {
            iterations: 25,
            warmup: 7,
        };

        let samples = measure(
            settings,
            || -> Result<Outcome, ()> {
                calls.set(calls.get() + 1);
                Ok(Outcome::Absent)
            },
            |_, _| Ok(()),
        )
        .unwrap();

        assert_eq!(calls.get(), 32);
        assert_eq!(samples.len(), 25);
    }

    #[test]
    fn test_run_records_every_iteration() {
        let w = Workload::generate(1000, Spacing::Sequential, Layout::Array).unwrap();
        let case = w.case(CaseKind::Last).unwrap();
        let settings = RunSettings {
            iterations: 100,
            warmup: 10,
        };

        let samples = run(&LinearSearch, &w, &case, settings).unwrap();
        assert_eq!(samples.len(), 100);
        assert!(samples.iter().all(|s| s.outcome == Outcome::Found(999)));
    }

    #[test]
    fn test_mismatch_aborts_on_first_iteration() {
        let w = Workload::generate(16, Spacing::Even, Layout::Array).unwrap();
        let case = w.case(CaseKind::Middle).unwrap();

        let err = run(&OffByOne, &w, &case, RunSettings::default()).unwrap_err();
        assert_eq!(
            err,
            CaseError::Mismatch {
                expected: Outcome::Found(8),
                actual: Outcome::Found(9),
                iteration: 0,
            }
        );
    }

    #[test]
    fn test_operation_failure_surfaces() {
        let w = Workload::generate(4, Spacing::Sequential, Layout::Array).unwrap();
        let case = w.case(CaseKind::Absent).unwrap();

        let err = run(&Failing, &w, &case, RunSettings::default()).unwrap_err();
        assert!(matches!(err, CaseError::Operation(OperationError::Failed { .. })));
    }
}
