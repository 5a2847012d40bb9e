use serde::Serialize;
use tracing::debug;

use crate::config::{
    EngineConfig, AUDIENCE_MATCH_WEIGHT, DEFAULT_RECOMMEND_LIMIT, ORG_MATCH_WEIGHT,
    PRIMARY_DRIVER_WEIGHT, SECONDARY_DRIVER_WEIGHT,
};
use crate::content::{ContentNode, NodeContexts};
use crate::selection::fallback::DefaultSlicePolicy;
use crate::store::ContentStore;
use crate::types::identifiers::AudienceId;
use crate::types::{rank_and_truncate, CallerContext, RankedResult, ScoredNode};

/// Explanation for why a document received its score.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub org_matched: bool,
    pub primary_driver_matched: bool,
    pub secondary_driver_matched: bool,
    pub matched_audiences: Vec<AudienceId>,
}

pub trait Scorer {
    fn score(&self, contexts: &NodeContexts, context: &CallerContext) -> ScoreBreakdown;

    fn score_value(&self, details: &ScoreBreakdown) -> f32 {
        let mut score = 0.0;
        if details.org_matched {
            score += ORG_MATCH_WEIGHT;
        }
        if details.primary_driver_matched {
            score += PRIMARY_DRIVER_WEIGHT;
        }
        if details.secondary_driver_matched {
            score += SECONDARY_DRIVER_WEIGHT;
        }
        score += AUDIENCE_MATCH_WEIGHT * details.matched_audiences.len() as f32;
        debug_assert!(score >= 0.0, "score {score} must be non-negative");
        score
    }
}

/// Fixed-weight scorer. Only explicit tags earn weight; a wildcard
/// dimension contributes nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct WeightedContextScorer;

impl Scorer for WeightedContextScorer {
    fn score(&self, contexts: &NodeContexts, context: &CallerContext) -> ScoreBreakdown {
        let org_matched = context
            .org
            .as_option()
            .is_some_and(|org| contexts.orgs.names(org));

        let primary_driver_matched = context
            .primary_driver
            .as_ref()
            .is_some_and(|d| contexts.drivers.names(d));

        let secondary_driver_matched = context
            .secondary_driver
            .as_ref()
            .is_some_and(|d| contexts.drivers.names(d));

        let matched_audiences = context
            .audiences
            .iter()
            .filter(|a| contexts.audiences.names(a))
            .cloned()
            .collect();

        ScoreBreakdown {
            org_matched,
            primary_driver_matched,
            secondary_driver_matched,
            matched_audiences,
        }
    }
}

/// Document recommendation: weighted score, then the default slice when
/// nothing scores.
pub struct Recommender<S> {
    scorer: S,
    fallback: DefaultSlicePolicy,
    limit: usize,
}

impl Default for Recommender<WeightedContextScorer> {
    fn default() -> Self {
        Self::new(WeightedContextScorer, DefaultSlicePolicy::default())
    }
}

impl Recommender<WeightedContextScorer> {
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(WeightedContextScorer, config.default_slice).with_limit(config.recommend_limit)
    }
}

impl<S: Scorer> Recommender<S> {
    pub fn new(scorer: S, fallback: DefaultSlicePolicy) -> Self {
        Self {
            scorer,
            fallback,
            limit: DEFAULT_RECOMMEND_LIMIT,
        }
    }

    /// Limit used by [`Recommender::recommend_default`].
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn score(&self, node: &ContentNode, context: &CallerContext) -> f32 {
        let details = self.scorer.score(node.contexts(), context);
        self.scorer.score_value(&details)
    }

    pub fn explain(&self, node: &ContentNode, context: &CallerContext) -> ScoreBreakdown {
        self.scorer.score(node.contexts(), context)
    }

    /// Rank `candidates` for `context`, keeping at most `limit` (at least 1).
    ///
    /// Zero scores are dropped. If nothing is left, the fallback slice of
    /// `candidates` is returned instead, so the result is empty only when
    /// `candidates` is.
    pub fn recommend<'a>(
        &self,
        context: &CallerContext,
        candidates: &'a [ContentNode],
        limit: usize,
    ) -> RankedResult<'a> {
        let limit = limit.max(1);

        let scored: Vec<ScoredNode<'a>> = candidates
            .iter()
            .map(|node| ScoredNode {
                node,
                score: self.score(node, context),
            })
            .filter(|s| s.score > 0.0)
            .collect();

        if scored.is_empty() {
            debug!(
                candidates = candidates.len(),
                slice = self.fallback.size,
                "no document scored above zero; using default slice"
            );
            return self.fallback.apply(candidates, limit);
        }

        rank_and_truncate(scored, limit)
    }

    /// [`Recommender::recommend`] with the configured limit.
    pub fn recommend_default<'a>(
        &self,
        context: &CallerContext,
        candidates: &'a [ContentNode],
    ) -> RankedResult<'a> {
        self.recommend(context, candidates, self.limit)
    }
}

pub fn score(node: &ContentNode, context: &CallerContext) -> f32 {
    Recommender::default().score(node, context)
}

/// Recommend documents from `store` with the standard weights and fallback.
pub fn recommend<'a>(
    context: &CallerContext,
    store: &'a ContentStore,
    limit: usize,
) -> RankedResult<'a> {
    Recommender::default().recommend(context, store.documents(), limit)
}
