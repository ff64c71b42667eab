//! Search Bench
//!
//! Micro-benchmark harness for search operations over arrays and linked lists.
//!
//! ## Architecture
//! - Workload: deterministic, strictly increasing inputs and their target cases
//! - Ops: the algorithms under test behind the [`Operation`] trait
//! - Bench: warm-up, per-call timing and correctness checks
//! - Report: integer-nanosecond aggregation and rendering
//! - Sweep: sizes × cases, sequential or on a worker pool

pub mod bench;
pub mod config;
pub mod error;
pub mod ops;
pub mod report;
pub mod sweep;
pub mod types;
pub mod workload;

pub use config::{Config, OutputFormat};
pub use error::{CaseError, ConfigError, OperationError, SweepError, WorkloadError};
pub use ops::{Operation, OperationKind};
pub use report::{CaseResult, Report, Stats};
pub use sweep::{run, Sweep};
pub use types::{Case, CaseKind, Outcome, RunSettings, Sample};
pub use workload::{Layout, Spacing, Workload};
