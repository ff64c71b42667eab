use super::Operation;
use crate::error::OperationError;
use crate::types::Outcome;
use crate::workload::{Layout, Workload};

/// Walks the workload's linked list; the outcome index is the node position.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkedListSearch;

impl Operation for LinkedListSearch {
    fn name(&self) -> &'static str {
        "linked-list-search"
    }

    fn layout(&self) -> Layout {
        Layout::LinkedList
    }

    fn evaluate(&self, workload: &Workload, target: i64) -> Result<Outcome, OperationError> {
        let list = workload.list().ok_or(OperationError::MissingLinkedList {
            operation: self.name(),
        })?;
        Ok(list.iter().position(|v| v == target).into())
    }
}
