use super::Operation;
use crate::error::OperationError;
use crate::types::Outcome;
use crate::workload::Workload;
use std::cmp::Ordering;

/// Halving search over the sorted array.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinarySearch;

impl Operation for BinarySearch {
    fn name(&self) -> &'static str {
        "binary-search"
    }

    fn evaluate(&self, workload: &Workload, target: i64) -> Result<Outcome, OperationError> {
        let values = workload.values();
        // Half-open window [low, high) so an empty slice needs no special case.
        let mut low = 0;
        let mut high = values.len();

        while low < high {
            let mid = low + (high - low) / 2;
            match values[mid].cmp(&target) {
                Ordering::Equal => return Ok(Outcome::Found(mid)),
                Ordering::Less => low = mid + 1,
                Ordering::Greater => high = mid,
            }
        }
        Ok(Outcome::Absent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workload::Layout;

    #[test]
    fn test_binary_search() {
        let w = Workload::from_values(vec![2, 4, 6, 8, 10, 12, 14], Layout::Array).unwrap();
        assert_eq!(BinarySearch.evaluate(&w, 10).unwrap(), Outcome::Found(4));
        assert_eq!(BinarySearch.evaluate(&w, 14).unwrap(), Outcome::Found(6));
        assert_eq!(BinarySearch.evaluate(&w, 5).unwrap(), Outcome::Absent);
        assert_eq!(BinarySearch.evaluate(&w, 100).unwrap(), Outcome::Absent);
    }
}
