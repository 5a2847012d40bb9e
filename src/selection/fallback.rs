use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_SLICE_SIZE;
use crate::content::ContentNode;
use crate::types::{RankedResult, ScoredNode};

/// What to recommend when nothing scores above zero: the first `size`
/// candidates in corpus order, each with score 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultSlicePolicy {
    pub size: usize,
}

impl Default for DefaultSlicePolicy {
    fn default() -> Self {
        Self {
            size: DEFAULT_SLICE_SIZE,
        }
    }
}

impl DefaultSlicePolicy {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    /// Never empty for a non-empty pool: both `size` and `limit` count as at least 1.
    pub fn apply<'a>(&self, pool: &'a [ContentNode], limit: usize) -> RankedResult<'a> {
        let take = self.size.max(1).min(limit.max(1));

        let entries = pool
            .iter()
            .take(take)
            .map(|node| ScoredNode { node, score: 0.0 })
            .collect();

        RankedResult::new(entries)
    }
}
