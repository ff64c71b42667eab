//! Singly linked list holding a workload's values in order
//!
//! Nodes live in one fallibly reserved arena and link to each other by
//! index, so building a list either succeeds or reports an allocation error.

use crate::error::WorkloadError;

#[derive(Debug)]
struct Node {
    value: i64,
    next: Option<usize>,
}

#[derive(Debug, Default)]
pub struct LinkedList {
    nodes: Vec<Node>,
    head: Option<usize>,
}

/// Arena with room for `len` nodes, or an allocation error.
fn reserve_nodes(len: usize) -> Result<Vec<Node>, WorkloadError> {
    let mut nodes = Vec::new();
    nodes
        .try_reserve_exact(len)
        .map_err(|_| WorkloadError::Allocation { size: len })?;
    Ok(nodes)
}

impl LinkedList {
    /// Build a list with the same values in the same order as `values`.
    pub fn from_values(values: &[i64]) -> Result<Self, WorkloadError> {
        let mut nodes = reserve_nodes(values.len())?;
        for (i, &value) in values.iter().enumerate() {
            let next = (i + 1 < values.len()).then_some(i + 1);
            nodes.push(Node { value, next });
        }

        Ok(Self {
            head: (!nodes.is_empty()).then_some(0),
            nodes,
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            next: self.head,
        }
    }
}

pub struct Iter<'a> {
    nodes: &'a [Node],
    next: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let node = &self.nodes[self.next?];
        self.next = node.next;
        Some(node.value)
    }
}
