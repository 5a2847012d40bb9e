use advocacy_context::content::{Document, Fact, KeyPoint, NextStep, NodeContexts};
use advocacy_context::store::{BrowsePool, ContentStore, Corpus};
use advocacy_context::trailhead::{
    apply_trailhead, pick_primary_step, resolve_step, resolve_steps, ResolvedStep, StepKind,
    StepRef, Trailhead, TrailheadFilters,
};
use advocacy_context::types::Selector;

fn make_store() -> ContentStore {
    ContentStore::from_corpus(Corpus {
        documents: vec![Document::new("doc-1", "Policy brief")],
        key_points: vec![
            KeyPoint::new("kp-ngo", "Community trust", "")
                .with_contexts(NodeContexts::any().with_orgs(["ngo"])),
            KeyPoint::new("kp-pub", "Public value", "")
                .with_contexts(NodeContexts::any().with_orgs(["pub"])),
            KeyPoint::new("kp-any", "Shared savings", ""),
        ],
        facts: vec![Fact::new("fact-1", "Savings of 12%", "Pilot results.")],
        next_steps: vec![NextStep::new("step-1", "Schedule a briefing")],
        ..Corpus::default()
    })
    .unwrap()
}

#[test]
fn dangling_steps_are_skipped_in_order() {
    let store = make_store();
    let trailhead = Trailhead::new("th", "Start here")
        .with_step(StepKind::Fact, "fact-1")
        .with_step(StepKind::Point, "kp-deleted")
        .with_step(StepKind::Doc, "doc-1");

    let resolved = resolve_steps(&trailhead, &store);
    assert_eq!(resolved.len(), 2);
    assert_eq!(resolved[0].id().as_str(), "fact-1");
    assert_eq!(resolved[1].id().as_str(), "doc-1");
    assert_eq!(resolved[1].kind(), StepKind::Doc);
}

#[test]
fn resolution_is_kind_checked() {
    let store = make_store();

    let step = resolve_step(&StepRef::new(StepKind::Step, "step-1"), &store);
    assert!(matches!(step, Some(ResolvedStep::Step(s)) if s.text == "Schedule a briefing"));

    // The id exists, but as a document rather than a key point.
    assert!(resolve_step(&StepRef::new(StepKind::Point, "doc-1"), &store).is_none());
}

#[test]
fn primary_step_prefers_point_then_fact_then_first() {
    let mixed = Trailhead::new("a", "A")
        .with_step(StepKind::Doc, "doc-1")
        .with_step(StepKind::Fact, "fact-1")
        .with_step(StepKind::Point, "kp-any");
    assert_eq!(pick_primary_step(&mixed).map(|s| s.target.as_str()), Some("kp-any"));

    let no_points = Trailhead::new("b", "B")
        .with_step(StepKind::Step, "step-1")
        .with_step(StepKind::Fact, "fact-1");
    assert_eq!(pick_primary_step(&no_points).map(|s| s.kind), Some(StepKind::Fact));

    let only_docs = Trailhead::new("c", "C")
        .with_step(StepKind::Doc, "doc-1")
        .with_step(StepKind::Step, "step-1");
    assert_eq!(pick_primary_step(&only_docs).map(|s| s.kind), Some(StepKind::Doc));

    assert!(pick_primary_step(&Trailhead::new("d", "D")).is_none());
}

#[test]
fn applying_a_trailhead_focuses_the_primary_node() {
    let store = make_store();
    let trailhead = Trailhead::new("th", "Public agencies")
        .with_filters(TrailheadFilters {
            org: Some("pub".into()),
            ..TrailheadFilters::default()
        })
        .with_step(StepKind::Point, "kp-any");

    let applied = apply_trailhead(&trailhead, &store, BrowsePool::KeyPoints);
    assert_eq!(applied.context.org, Selector::only("pub"));
    assert!(applied.context.audiences.is_empty());
    assert_eq!(applied.context.primary_driver, None);

    let pool: Vec<&str> = applied.nodes.iter().map(|n| n.id().as_str()).collect();
    assert_eq!(pool, vec!["kp-pub", "kp-any"]);
    assert_eq!(applied.focus_index, 1);
    assert_eq!(applied.focused().map(|n| n.id().as_str()), Some("kp-any"));
}

#[test]
fn focus_falls_back_to_the_top_of_the_pool() {
    let store = make_store();

    // Primary node is filtered out by the trailhead's own org.
    let filtered_out = Trailhead::new("th", "Public")
        .with_filters(TrailheadFilters {
            org: Some("pub".into()),
            ..TrailheadFilters::default()
        })
        .with_step(StepKind::Point, "kp-ngo");
    let applied = apply_trailhead(&filtered_out, &store, BrowsePool::KeyPoints);
    assert_eq!(applied.primary_ref.as_ref().map(|s| s.target.as_str()), Some("kp-ngo"));
    assert_eq!(applied.focus_index, 0);

    // No steps at all: the first pool entry gets focus.
    let stepless = Trailhead::new("th2", "Nowhere").with_filters(TrailheadFilters {
        org: Some("nowhere".into()),
        ..TrailheadFilters::default()
    });
    let applied = apply_trailhead(&stepless, &store, BrowsePool::KeyPoints);
    assert!(applied.primary_ref.is_none());
    assert_eq!(applied.focused().map(|n| n.id().as_str()), Some("kp-any"));

    // Empty pool: this store has no facts.
    let bare = ContentStore::from_corpus(Corpus {
        key_points: vec![KeyPoint::new("kp", "Only", "")],
        ..Corpus::default()
    })
    .unwrap();
    let facts_first = Trailhead::new("th3", "Facts").with_step(StepKind::Fact, "fact-x");
    let applied = apply_trailhead(&facts_first, &bare, BrowsePool::Facts);
    assert!(applied.nodes.is_empty());
    assert_eq!(applied.focus_index, 0);
    assert!(applied.focused().is_none());
}

#[test]
fn any_in_trailhead_filters_is_the_caller_wildcard() {
    let store = make_store();
    let trailhead: Trailhead = serde_json::from_str(
        r#"{
            "id": "th",
            "title": "Everyone",
            "filters": { "org": "any", "driver": "reg", "audience": "any" },
            "steps": [{ "kind": "point", "ref": "kp-ngo" }]
        }"#,
    )
    .unwrap();

    let applied = apply_trailhead(&trailhead, &store, BrowsePool::KeyPoints);
    assert!(applied.context.org.is_any());
    assert!(applied.context.audiences.is_empty());
    assert_eq!(applied.context.primary_driver.as_ref().map(|d| d.as_str()), Some("reg"));
    assert_eq!(applied.nodes.len(), 3);
    assert_eq!(applied.focus_index, 0);
}

#[test]
fn fact_primary_step_opens_the_fact_pool() {
    let store = make_store();
    let trailhead = Trailhead::new("th", "By the numbers").with_step(StepKind::Fact, "fact-1");

    let applied = apply_trailhead(&trailhead, &store, BrowsePool::KeyPoints);
    assert_eq!(applied.pool, BrowsePool::Facts);
    assert_eq!(applied.focused().map(|n| n.id().as_str()), Some("fact-1"));

    let points = Trailhead::new("th2", "Talking points").with_step(StepKind::Point, "kp-pub");
    let applied = apply_trailhead(&points, &store, BrowsePool::Facts);
    assert_eq!(applied.pool, BrowsePool::KeyPoints);
    assert_eq!(applied.focused().map(|n| n.id().as_str()), Some("kp-pub"));
}

#[test]
fn other_primary_kinds_keep_the_current_pool() {
    let store = make_store();
    let trailhead = Trailhead::new("th", "Read first").with_step(StepKind::Doc, "doc-1");

    let applied = apply_trailhead(&trailhead, &store, BrowsePool::Facts);
    assert_eq!(applied.pool, BrowsePool::Facts);
    assert_eq!(applied.focus_index, 0);

    let stepless = Trailhead::new("th2", "Empty");
    let applied = apply_trailhead(&stepless, &store, BrowsePool::KeyPoints);
    assert_eq!(applied.pool, BrowsePool::KeyPoints);
}
