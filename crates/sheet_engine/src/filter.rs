use serde::{Deserialize, Serialize};

use crate::types::ProblemRecord;

/// Optional topic/difficulty predicates. Empty lists are no-ops.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetFilters {
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub difficulty: Vec<String>,
}

/// Keep the records whose topic and difficulty pass the active predicates,
/// preserving original relative order.
pub fn apply_filters(problems: &[ProblemRecord], filters: &SheetFilters) -> Vec<ProblemRecord> {
    problems
        .iter()
        .filter(|problem| {
            (filters.difficulty.is_empty()
                || filters.difficulty.iter().any(|d| d == &problem.difficulty))
                && (filters.topics.is_empty()
                    || filters.topics.iter().any(|t| t == &problem.topic))
        })
        .cloned()
        .collect()
}
