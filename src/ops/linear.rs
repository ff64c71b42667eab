use super::Operation;
use crate::error::OperationError;
use crate::types::Outcome;
use crate::workload::Workload;

/// Front-to-back scan; returns the first matching index.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearSearch;

impl Operation for LinearSearch {
    fn name(&self) -> &'static str {
        "linear-search"
    }

    fn evaluate(&self, workload: &Workload, target: i64) -> Result<Outcome, OperationError> {
        Ok(workload.values().iter().position(|&v| v == target).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workload::Layout;

    #[test]
    fn test_linear_search() {
        let w = Workload::from_values(vec![2, 3, 4, 5, 8], Layout::Array).unwrap();
        assert_eq!(LinearSearch.evaluate(&w, 5).unwrap(), Outcome::Found(3));
        assert_eq!(LinearSearch.evaluate(&w, 2).unwrap(), Outcome::Found(0));
        assert_eq!(LinearSearch.evaluate(&w, 9).unwrap(), Outcome::Absent);
    }
}
