//! Workload generator
//!
//! Produces deterministic, strictly increasing inputs and the target cases
//! derived from them. A workload is never mutated after construction.

pub mod linked;

pub use linked::LinkedList;

use crate::error::{ConfigError, WorkloadError};
use crate::types::{Case, CaseKind, Outcome};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Target that is never present: generated values are non-negative.
pub const ABSENT_TARGET: i64 = -1;

/// Value generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spacing {
    /// value(i) = i
    #[default]
    Sequential,
    /// value(i) = 2 * i
    Even,
}

impl Spacing {
    fn step(&self) -> i64 {
        match self {
            Spacing::Sequential => 1,
            Spacing::Even => 2,
        }
    }
}

impl FromStr for Spacing {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sequential" => Ok(Spacing::Sequential),
            "even" => Ok(Spacing::Even),
            other => Err(ConfigError::UnknownSpacing(other.to_string())),
        }
    }
}

/// Physical representations a workload carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Array,
    /// The array plus a linked list with the same values
    LinkedList,
}

#[derive(Debug)]
pub struct Workload {
    values: Vec<i64>,
    list: Option<LinkedList>,
}

impl Workload {
    /// Generate `size` strictly increasing values.
    pub fn generate(size: usize, spacing: Spacing, layout: Layout) -> Result<Self, WorkloadError> {
        let mut values = Vec::new();
        values
            .try_reserve_exact(size)
            .map_err(|_| WorkloadError::Allocation { size })?;

        let step = spacing.step();
        for i in 0..size {
            let value = i64::try_from(i)
                .ok()
                .and_then(|v| v.checked_mul(step))
                .ok_or(WorkloadError::ValueOverflow { index: i })?;
            values.push(value);
        }

        Self::with_layout(values, layout)
    }

    /// Build a workload from explicit values, which must be strictly increasing.
    pub fn from_values(values: Vec<i64>, layout: Layout) -> Result<Self, WorkloadError> {
        if let Some(index) = values.windows(2).position(|w| w[0] >= w[1]) {
            return Err(WorkloadError::NotIncreasing { index: index + 1 });
        }
        Self::with_layout(values, layout)
    }

    fn with_layout(values: Vec<i64>, layout: Layout) -> Result<Self, WorkloadError> {
        let list = match layout {
            Layout::Array => None,
            Layout::LinkedList => Some(LinkedList::from_values(&values)?),
        };
        Ok(Self { values, list })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn list(&self) -> Option<&LinkedList> {
        self.list.as_ref()
    }

    /// Target and expected outcome for `kind`, or `None` when the case
    /// needs a non-empty workload.
    pub fn case(&self, kind: CaseKind) -> Option<Case> {
        let index = match kind {
            CaseKind::Absent => {
                return Some(Case {
                    kind,
                    target: ABSENT_TARGET,
                    expected: Outcome::Absent,
                })
            }
            CaseKind::First => 0,
            CaseKind::Middle => self.len() / 2,
            CaseKind::Last => self.len().checked_sub(1)?,
        };
        let target = *self.values.get(index)?;
        Some(Case {
            kind,
            target,
            expected: Outcome::Found(index),
        })
    }
}
