use tracing::debug;

use crate::content::{ContentNode, Document, Fact, KeyPoint, NextStep};
use crate::selection::filters;
use crate::store::{BrowsePool, ContentStore};
use crate::trailhead::model::{StepKind, StepRef, Trailhead};
use crate::types::identifiers::NodeId;
use crate::types::CallerContext;

/// A step dereferenced against the store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedStep<'a> {
    Point(&'a KeyPoint),
    Fact(&'a Fact),
    Doc(&'a Document),
    Step(&'a NextStep),
}

impl<'a> ResolvedStep<'a> {
    pub fn kind(&self) -> StepKind {
        match self {
            ResolvedStep::Point(_) => StepKind::Point,
            ResolvedStep::Fact(_) => StepKind::Fact,
            ResolvedStep::Doc(_) => StepKind::Doc,
            ResolvedStep::Step(_) => StepKind::Step,
        }
    }

    pub fn id(&self) -> &'a NodeId {
        match self {
            ResolvedStep::Point(k) => &k.id,
            ResolvedStep::Fact(f) => &f.id,
            ResolvedStep::Doc(d) => &d.id,
            ResolvedStep::Step(s) => &s.id,
        }
    }

    pub fn headline(&self) -> &'a str {
        match self {
            ResolvedStep::Point(k) => &k.title,
            ResolvedStep::Fact(f) => &f.claim,
            ResolvedStep::Doc(d) => &d.title,
            ResolvedStep::Step(s) => &s.text,
        }
    }
}

/// First `point` step, else first `fact`, else the first step of any kind.
pub fn pick_primary_step(trailhead: &Trailhead) -> Option<&StepRef> {
    let first_of = |kind: StepKind| trailhead.steps.iter().find(|s| s.kind == kind);

    first_of(StepKind::Point)
        .or_else(|| first_of(StepKind::Fact))
        .or_else(|| trailhead.steps.first())
}

/// `None` when the id is missing or names a node of another kind.
pub fn resolve_step<'a>(step: &StepRef, store: &'a ContentStore) -> Option<ResolvedStep<'a>> {
    let resolved = match step.kind {
        StepKind::Point => store.key_point(&step.target).map(ResolvedStep::Point),
        StepKind::Fact => store.fact(&step.target).map(ResolvedStep::Fact),
        StepKind::Doc => store.document(&step.target).map(ResolvedStep::Doc),
        StepKind::Step => store.next_step(&step.target).map(ResolvedStep::Step),
    };

    if resolved.is_none() {
        debug!(kind = ?step.kind, target = %step.target, "trailhead step reference not found; skipping");
    }
    resolved
}

/// Resolve every step in order, omitting dangling references.
pub fn resolve_steps<'a>(trailhead: &Trailhead, store: &'a ContentStore) -> Vec<ResolvedStep<'a>> {
    trailhead
        .steps
        .iter()
        .filter_map(|step| resolve_step(step, store))
        .collect()
}

/// Outcome of entering a trailhead: the context it seeds, the filtered pool
/// under that context, and where the pool should initially be focused.
#[derive(Debug, Clone)]
pub struct TrailheadApplication<'a> {
    pub context: CallerContext,
    pub primary_ref: Option<StepRef>,
    /// The pool the trailhead opens on.
    pub pool: BrowsePool,
    /// `pool` filtered by `context`, in corpus order.
    pub nodes: Vec<&'a ContentNode>,
    pub focus_index: usize,
}

impl<'a> TrailheadApplication<'a> {
    pub fn focused(&self) -> Option<&'a ContentNode> {
        self.nodes.get(self.focus_index).copied()
    }
}

/// A point or fact primary step switches to its own pool. Any other
/// primary step keeps `current`.
pub fn pool_for_step(primary: Option<&StepRef>, current: BrowsePool) -> BrowsePool {
    match primary.map(|step| step.kind) {
        Some(StepKind::Point) => BrowsePool::KeyPoints,
        Some(StepKind::Fact) => BrowsePool::Facts,
        _ => current,
    }
}

/// The context a trailhead seeds. Unset filters become the caller wildcard.
pub fn trailhead_context(trailhead: &Trailhead) -> CallerContext {
    let filters = &trailhead.filters;
    CallerContext {
        org: filters.org_selector(),
        audiences: filters.audience().into_iter().collect(),
        primary_driver: filters.driver(),
        secondary_driver: None,
        query: String::new(),
    }
}

pub fn apply_trailhead<'a>(
    trailhead: &Trailhead,
    store: &'a ContentStore,
    current: BrowsePool,
) -> TrailheadApplication<'a> {
    let context = trailhead_context(trailhead);
    let primary_ref = pick_primary_step(trailhead).cloned();
    let pool = pool_for_step(primary_ref.as_ref(), current);
    let nodes = filters::filter(store.pool(pool), &context);

    // Falls back to 0 both when the primary node is filtered out and when the pool is empty.
    let focus_index = primary_ref
        .as_ref()
        .and_then(|primary| nodes.iter().position(|n| n.id() == &primary.target))
        .unwrap_or(0);

    TrailheadApplication {
        context,
        primary_ref,
        pool,
        nodes,
        focus_index,
    }
}
