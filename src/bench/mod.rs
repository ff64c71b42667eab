//! Benchmark module
//! Warm-up, per-call timing and correctness checks for one case

pub mod latency;

pub use latency::{measure, run};
