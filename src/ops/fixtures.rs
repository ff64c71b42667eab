//! Known-answer fixtures run against an operation before a sweep.

use super::Operation;
use crate::types::Outcome;
use crate::workload::Workload;
use serde::Serialize;
use tracing::{debug, warn};

pub struct Fixture {
    pub name: &'static str,
    pub values: &'static [i64],
    pub target: i64,
    pub expected: Outcome,
}

const EVENS: &[i64] = &[2, 4, 6, 8, 10, 12, 14];
const SINGLE: &[i64] = &[42];
const WIDE: &[i64] = &[i32::MIN as i64, -100, 0, 100, i32::MAX as i64];

pub const FIXTURES: &[Fixture] = &[
    Fixture { name: "evens/inner", values: EVENS, target: 10, expected: Outcome::Found(4) },
    Fixture { name: "evens/first", values: EVENS, target: 2, expected: Outcome::Found(0) },
    Fixture { name: "evens/last", values: EVENS, target: 14, expected: Outcome::Found(6) },
    Fixture { name: "evens/gap", values: EVENS, target: 5, expected: Outcome::Absent },
    Fixture { name: "single/hit", values: SINGLE, target: 42, expected: Outcome::Found(0) },
    Fixture { name: "single/miss", values: SINGLE, target: 99, expected: Outcome::Absent },
    Fixture { name: "empty", values: &[], target: 5, expected: Outcome::Absent },
    Fixture { name: "wide/max", values: WIDE, target: i32::MAX as i64, expected: Outcome::Found(4) },
    Fixture { name: "wide/min", values: WIDE, target: i32::MIN as i64, expected: Outcome::Found(0) },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureFailure {
    pub fixture: &'static str,
    pub expected: Outcome,
    pub error: String,
}

/// Run every fixture; returns the failures (empty when the operation passes).
pub fn self_check(op: &dyn Operation) -> Vec<FixtureFailure> {
    let mut failures = Vec::new();

    for fixture in FIXTURES {
        let result = Workload::from_values(fixture.values.to_vec(), op.layout())
            .map_err(|e| e.to_string())
            .and_then(|w| op.evaluate(&w, fixture.target).map_err(|e| e.to_string()));

        let error = match result {
            Ok(actual) if actual == fixture.expected => {
                debug!(operation = op.name(), fixture = fixture.name, "fixture passed");
                continue;
            }
            Ok(actual) => format!("got {}", actual),
            Err(e) => e,
        };

        warn!(
            operation = op.name(),
            fixture = fixture.name,
            expected = %fixture.expected,
            "fixture failed: {}",
            error
        );
        failures.push(FixtureFailure {
            fixture: fixture.name,
            expected: fixture.expected,
            error,
        });
    }

    failures
}
