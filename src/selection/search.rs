//! Omnibox search across every node kind.
//!
//! Each node is projected to a title, a description and a lower-cased
//! searchable blob. A title hit outranks a body hit; everything else is
//! dropped. An empty query is a browse request and returns the head of the
//! corpus unscored.

use crate::config::{
    EngineConfig, BODY_MATCH_SCORE, BROWSE_DEFAULT_LIMIT, SEARCH_RESULT_LIMIT, TITLE_MATCH_SCORE,
};
use crate::content::ContentNode;
use crate::types::{rank_and_truncate, RankedResult, ScoredNode, TextQuery};

/// Uniform search view of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchProjection<'a> {
    pub title: &'a str,
    pub description: &'a str,
    /// title + description + body, lower-cased
    pub searchable_text: String,
}

impl<'a> SearchProjection<'a> {
    pub fn of(node: &'a ContentNode) -> Self {
        let title = node.headline();
        let description = node.description();
        let searchable_text = format!("{} {} {}", title, description, node.body()).to_lowercase();

        Self {
            title,
            description,
            searchable_text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRanker {
    limit: usize,
    browse_limit: usize,
}

impl Default for SearchRanker {
    fn default() -> Self {
        Self {
            limit: SEARCH_RESULT_LIMIT,
            browse_limit: BROWSE_DEFAULT_LIMIT,
        }
    }
}

impl SearchRanker {
    pub fn new(limit: usize, browse_limit: usize) -> Self {
        Self {
            limit,
            browse_limit,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.search_limit, config.browse_limit)
    }

    /// 3 for a title hit, 1 for a hit anywhere else, 0 for no hit.
    pub fn score(&self, projection: &SearchProjection<'_>, query: &TextQuery) -> f32 {
        if query.is_empty() {
            return 0.0;
        }
        if projection.title.to_lowercase().contains(&query.needle) {
            TITLE_MATCH_SCORE
        } else if projection.searchable_text.contains(&query.needle) {
            BODY_MATCH_SCORE
        } else {
            0.0
        }
    }

    pub fn rank<'a>(&self, query: &str, corpus: &'a [ContentNode]) -> RankedResult<'a> {
        let query = TextQuery::new(query);

        if query.is_empty() {
            let entries = corpus
                .iter()
                .take(self.browse_limit)
                .map(|node| ScoredNode { node, score: 0.0 })
                .collect();
            return RankedResult::new(entries);
        }

        let hits: Vec<ScoredNode<'a>> = corpus
            .iter()
            .filter_map(|node| {
                let score = self.score(&SearchProjection::of(node), &query);
                (score > 0.0).then_some(ScoredNode { node, score })
            })
            .collect();

        rank_and_truncate(hits, self.limit)
    }
}

/// Rank `corpus` for `query` with the default limits.
pub fn rank<'a>(query: &str, corpus: &'a [ContentNode]) -> RankedResult<'a> {
    SearchRanker::default().rank(query, corpus)
}
