//! Core types for the benchmark harness

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a single search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "index")]
pub enum Outcome {
    Found(usize),
    Absent,
}

impl Outcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }
}

impl From<Option<usize>> for Outcome {
    fn from(index: Option<usize>) -> Self {
        match index {
            Some(i) => Outcome::Found(i),
            None => Outcome::Absent,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Found(i) => write!(f, "found at {}", i),
            Outcome::Absent => write!(f, "absent"),
        }
    }
}

/// Named target scenario. Declaration order is report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseKind {
    First,
    Middle,
    Last,
    Absent,
}

impl CaseKind {
    pub const ALL: [CaseKind; 4] = [
        CaseKind::First,
        CaseKind::Middle,
        CaseKind::Last,
        CaseKind::Absent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseKind::First => "first",
            CaseKind::Middle => "middle",
            CaseKind::Last => "last",
            CaseKind::Absent => "absent",
        }
    }
}

impl fmt::Display for CaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A target to search for and the outcome known from the workload's construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Case {
    pub kind: CaseKind,
    pub target: i64,
    pub expected: Outcome,
}

/// One timed invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub elapsed_ns: u64,
    pub outcome: Outcome,
}

/// Timed runner parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSettings {
    pub iterations: u32,
    pub warmup: u32,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            iterations: 1000,
            warmup: 10,
        }
    }
}
