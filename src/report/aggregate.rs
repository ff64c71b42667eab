//! Integer-nanosecond statistics over a case's samples

use crate::types::Sample;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub iterations: u64,
    pub total_ns: u128,
    pub mean_ns: u64,
    pub min_ns: u64,
    pub max_ns: u64,
    pub success_count: u64,
    /// Mean divided by workload size, in picoseconds. `None` for empty workloads.
    pub per_element_ps: Option<u64>,
}

impl Stats {
    /// Fraction of iterations that found the target, in [0, 1].
    pub fn success_rate(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.success_count as f64 / self.iterations as f64
    }
}

/// Aggregate one case. `None` when there are no samples.
pub fn aggregate(samples: &[Sample], size: usize) -> Option<Stats> {
    if samples.is_empty() {
        return None;
    }

    let iterations = samples.len() as u64;
    let total_ns: u128 = samples.iter().map(|s| u128::from(s.elapsed_ns)).sum();
    let min_ns = samples.iter().map(|s| s.elapsed_ns).min().unwrap_or(0);
    let max_ns = samples.iter().map(|s| s.elapsed_ns).max().unwrap_or(0);
    let success_count = samples.iter().filter(|s| s.outcome.is_found()).count() as u64;

    let mean_ns = (total_ns / u128::from(iterations)) as u64;
    let per_element_ps = (size > 0)
        .then(|| total_ns * 1000 / (u128::from(iterations) * size as u128))
        .map(|ps| u64::try_from(ps).unwrap_or(u64::MAX));

    Some(Stats {
        iterations,
        total_ns,
        mean_ns,
        min_ns,
        max_ns,
        success_count,
        per_element_ps,
    })
}
