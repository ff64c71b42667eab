//! Error types

use crate::types::Outcome;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorkloadError {
    #[error("cannot allocate workload of {size} elements")]
    Allocation { size: usize },

    #[error("value at position {index} does not fit in i64")]
    ValueOverflow { index: usize },

    #[error("values are not strictly increasing at position {index}")]
    NotIncreasing { index: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OperationError {
    #[error("operation `{operation}` needs a linked-list workload")]
    MissingLinkedList { operation: &'static str },

    #[error("operation `{operation}` failed: {reason}")]
    Failed {
        operation: &'static str,
        reason: String,
    },
}

/// Why a single (size, case) run was aborted
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CaseError {
    #[error("correctness mismatch at iteration {iteration}: expected {expected}, got {actual}")]
    Mismatch {
        expected: Outcome,
        actual: Outcome,
        iteration: u32,
    },

    #[error("operation panicked: {0}")]
    Panicked(String),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("iterations must be greater than zero")]
    ZeroIterations,

    #[error("parallel.workers must be greater than zero")]
    ZeroWorkers,

    #[error("no input sizes configured")]
    NoSizes,

    #[error("unknown operation `{0}` (expected one of: linear-search, binary-search, linked-list-search)")]
    UnknownOperation(String),

    #[error("unknown spacing `{0}` (expected sequential or even)")]
    UnknownSpacing(String),

    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum SweepError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("worker thread panicked")]
    WorkerPanic,
}
