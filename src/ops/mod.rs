//! Operations under test
//!
//! Every algorithm is a pure function of `(workload, target)`. The harness
//! only sees the [`Operation`] trait; [`OperationKind`] maps identifiers
//! from the config or command line to implementations.

mod binary;
pub mod fixtures;
mod linear;
mod linked;

pub use binary::BinarySearch;
pub use linear::LinearSearch;
pub use linked::LinkedListSearch;

use crate::error::{ConfigError, OperationError};
use crate::types::Outcome;
use crate::workload::{Layout, Workload};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub trait Operation: Send + Sync {
    fn name(&self) -> &'static str;

    /// Representation the workload must carry for `evaluate` to succeed.
    fn layout(&self) -> Layout {
        Layout::Array
    }

    fn evaluate(&self, workload: &Workload, target: i64) -> Result<Outcome, OperationError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperationKind {
    #[default]
    LinearSearch,
    BinarySearch,
    LinkedListSearch,
}

impl OperationKind {
    pub const ALL: [OperationKind; 3] = [
        OperationKind::LinearSearch,
        OperationKind::BinarySearch,
        OperationKind::LinkedListSearch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::LinearSearch => "linear-search",
            OperationKind::BinarySearch => "binary-search",
            OperationKind::LinkedListSearch => "linked-list-search",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OperationKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownOperation(s.to_string()))
    }
}

pub fn build(kind: OperationKind) -> Box<dyn Operation> {
    match kind {
        OperationKind::LinearSearch => Box::new(LinearSearch),
        OperationKind::BinarySearch => Box::new(BinarySearch),
        OperationKind::LinkedListSearch => Box::new(LinkedListSearch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workload::{Spacing, ABSENT_TARGET};
    use proptest::prelude::*;

    #[test]
    fn test_kind_round_trips_through_str() {
        for kind in OperationKind::ALL {
            assert_eq!(kind.as_str().parse::<OperationKind>().unwrap(), kind);
            assert_eq!(build(kind).name(), kind.as_str());
        }
        assert!("bogo-search".parse::<OperationKind>().is_err());
    }

    #[test]
    fn test_kind_serde_matches_identifier() {
        let json = serde_json::to_string(&OperationKind::LinkedListSearch).unwrap();
        assert_eq!(json, "\"linked-list-search\"");
    }

    proptest! {
        #[test]
        fn prop_present_target_found_at_index(size in 1usize..512, pick in any::<prop::sample::Index>()) {
            for kind in OperationKind::ALL {
                let op = build(kind);
                let w = Workload::generate(size, Spacing::Even, op.layout()).unwrap();
                let k = pick.index(size);
                let target = w.values()[k];
                prop_assert_eq!(op.evaluate(&w, target).unwrap(), Outcome::Found(k));
            }
        }

        #[test]
        fn prop_absent_target_never_found(size in 0usize..512) {
            for kind in OperationKind::ALL {
                let op = build(kind);
                let w = Workload::generate(size, Spacing::Sequential, op.layout()).unwrap();
                prop_assert_eq!(op.evaluate(&w, ABSENT_TARGET).unwrap(), Outcome::Absent);
            }
        }
    }
}
