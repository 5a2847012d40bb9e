use std::cmp::Ordering;

use serde::Serialize;

use crate::content::ContentNode;
use crate::types::identifiers::NodeId;

/// A node reference paired with the score it received.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoredNode<'a> {
    pub node: &'a ContentNode,
    pub score: f32,
}

/// Ordered output of a scored operation.
///
/// Scores are non-increasing along the sequence. Entries borrow from the
/// store; nothing is copied.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct RankedResult<'a> {
    entries: Vec<ScoredNode<'a>>,
}

impl<'a> RankedResult<'a> {
    pub fn new(entries: Vec<ScoredNode<'a>>) -> Self {
        debug_assert!(
            entries.windows(2).all(|w| w[0].score >= w[1].score),
            "ranked entries must have non-increasing scores"
        );
        Self { entries }
    }

    pub fn entries(&self) -> &[ScoredNode<'a>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredNode<'a>> {
        self.entries.iter()
    }

    pub fn ids(&self) -> Vec<&'a NodeId> {
        self.entries.iter().map(|e| e.node.id()).collect()
    }

    pub fn nodes(&self) -> Vec<&'a ContentNode> {
        self.entries.iter().map(|e| e.node).collect()
    }

    pub fn into_entries(self) -> Vec<ScoredNode<'a>> {
        self.entries
    }
}

impl<'r, 'a> IntoIterator for &'r RankedResult<'a> {
    type Item = &'r ScoredNode<'a>;
    type IntoIter = std::slice::Iter<'r, ScoredNode<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Title ordering used for tie-breaks: case-folded first, raw text second.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Global ranking order: (score desc, title asc, id asc).
pub fn compare_ranked(a: &ScoredNode<'_>, b: &ScoredNode<'_>) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| compare_titles(a.node.headline(), b.node.headline()))
        .then_with(|| a.node.id().cmp(b.node.id()))
}

/// Sort into ranking order and keep at most `limit` entries.
pub fn rank_and_truncate<'a>(mut entries: Vec<ScoredNode<'a>>, limit: usize) -> RankedResult<'a> {
    entries.sort_by(compare_ranked);

    debug_assert!(entries
        .windows(2)
        .all(|w| compare_ranked(&w[0], &w[1]) != Ordering::Greater));

    entries.truncate(limit);
    RankedResult::new(entries)
}
