use std::fs;

use advocacy_context::content::NodeKind;
use advocacy_context::store::{ContentStore, CorpusError};
use advocacy_context::types::{CallerContext, NodeId, TrailheadId};
use tempfile::tempdir;

const CORPUS: &str = r#"{
  "version": "2024-06",
  "organizations": [
    { "id": "pub", "name": "Public agency", "description": "Government bodies" },
    { "id": "ngo", "name": "Nonprofit" }
  ],
  "audiences": [{ "id": "council", "name": "City council" }],
  "drivers": [{ "id": "reg", "name": "Regulatory" }],
  "documents": [
    {
      "id": "doc-1",
      "title": "Cost brief",
      "body": "Two pages on cost.",
      "tags": ["finance", "Brief"],
      "contexts": { "orgs": ["pub"], "drivers": ["reg"] }
    },
    { "id": "doc-2", "title": "Untagged" }
  ],
  "key_points": [
    { "id": "kp-1", "title": "Savings", "body": "It pays back.", "contexts": { "orgs": [] } }
  ],
  "facts": [
    { "id": "fact-1", "claim": "30% fewer errors", "support": "Audit.", "source": "State audit", "tags": ["finance"] }
  ],
  "next_steps": [{ "id": "step-1", "text": "Call your representative" }],
  "trailheads": [
    {
      "id": "th-1",
      "title": "Start with cost",
      "summary": "For budget conversations.",
      "filters": { "org": "pub" },
      "steps": [{ "kind": "doc", "ref": "doc-1" }, { "kind": "point", "ref": "kp-gone" }]
    }
  ]
}"#;

#[test]
fn loads_every_collection_in_corpus_order() {
    let store = ContentStore::from_json_slice(CORPUS.as_bytes()).unwrap();

    let kinds: Vec<NodeKind> = store.nodes().iter().map(|n| n.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::Document,
            NodeKind::Document,
            NodeKind::KeyPoint,
            NodeKind::Fact,
            NodeKind::NextStep,
        ]
    );

    let counts = store.manifest().counts;
    assert_eq!(counts.documents, 2);
    assert_eq!(counts.trailheads, 1);
    assert_eq!(counts.nodes(), store.len());
    assert_eq!(store.manifest().dataset_label.as_deref(), Some("2024-06"));

    assert_eq!(store.document(&NodeId::from("doc-1")).unwrap().title, "Cost brief");
    assert!(store.key_point(&NodeId::from("doc-1")).is_none());
    assert_eq!(store.fact(&NodeId::from("fact-1")).unwrap().source.as_deref(), Some("State audit"));
    assert_eq!(store.next_step(&NodeId::from("step-1")).unwrap().text, "Call your representative");
    assert_eq!(store.trailhead(&TrailheadId::from("th-1")).unwrap().steps.len(), 2);
}

#[test]
fn missing_and_empty_contexts_are_wildcards() {
    let store = ContentStore::from_json_slice(CORPUS.as_bytes()).unwrap();

    let untagged = store.node(&NodeId::from("doc-2")).unwrap();
    assert!(untagged.contexts().orgs.is_unconstrained());
    assert!(untagged.contexts().audiences.is_unconstrained());
    assert!(untagged.contexts().drivers.is_unconstrained());

    let empty_orgs = store.node(&NodeId::from("kp-1")).unwrap();
    assert!(empty_orgs.contexts().orgs.is_unconstrained());
}

#[test]
fn version_is_a_content_hash() {
    let a = ContentStore::from_json_slice(CORPUS.as_bytes()).unwrap();
    let b = ContentStore::from_reader(CORPUS.as_bytes()).unwrap();
    assert_eq!(a.manifest().version, b.manifest().version);
    assert!(a.manifest().version.as_str().starts_with("sha256:"));

    let edited = CORPUS.replace("Cost brief", "Cost memo");
    let c = ContentStore::from_json_slice(edited.as_bytes()).unwrap();
    assert_ne!(a.manifest().version, c.manifest().version);
}

#[test]
fn loads_from_a_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("corpus.json");
    fs::write(&path, CORPUS).unwrap();

    let store = ContentStore::from_path(&path).unwrap();
    assert_eq!(store.len(), 5);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = ContentStore::from_path(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, CorpusError::Io(_)));
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let err = ContentStore::from_json_slice(b"{ \"documents\": [ { \"id\": 7 } ] }").unwrap_err();
    assert!(matches!(err, CorpusError::Serialization(_)));
}

#[test]
fn duplicate_ids_are_rejected_across_kinds() {
    let raw = r#"{
      "documents": [{ "id": "same", "title": "Doc" }],
      "facts": [{ "id": "same", "claim": "Fact" }]
    }"#;
    let err = ContentStore::from_json_slice(raw.as_bytes()).unwrap_err();
    assert!(matches!(err, CorpusError::DuplicateNodeId(ref id) if id == "same"));

    let raw = r#"{
      "trailheads": [{ "id": "th", "title": "A" }, { "id": "th", "title": "B" }]
    }"#;
    let err = ContentStore::from_json_slice(raw.as_bytes()).unwrap_err();
    assert!(matches!(err, CorpusError::DuplicateTrailheadId(_)));
}

#[test]
fn blank_ids_are_rejected() {
    let raw = r#"{ "key_points": [{ "id": " kp", "title": "Padded" }] }"#;
    let err = ContentStore::from_json_slice(raw.as_bytes()).unwrap_err();
    assert!(matches!(err, CorpusError::InvalidId { .. }));
}

#[test]
fn empty_corpus_is_valid() {
    let store = ContentStore::from_json_slice(b"{}").unwrap();
    assert!(store.is_empty());
    assert!(store.trailheads().is_empty());
}

#[test]
fn tags_are_case_insensitive() {
    let store = ContentStore::from_json_slice(CORPUS.as_bytes()).unwrap();

    let finance: Vec<&str> = store.tagged("finance").iter().map(|n| n.id().as_str()).collect();
    assert_eq!(finance, vec!["doc-1", "fact-1"]);
    assert_eq!(store.tagged("brief").len(), 1);
}

#[test]
fn tag_lookup_folds_non_ascii_case() {
    let store = ContentStore::from_json_slice(
        r#"{
          "documents": [
            { "id": "doc-eco", "title": "Budget", "tags": ["Économie"] },
            { "id": "doc-str", "title": "Streets", "tags": ["STRASSE"] }
          ]
        }"#
        .as_bytes(),
    )
    .unwrap();

    let tagged: Vec<&str> = store.tagged("économie").iter().map(|n| n.id().as_str()).collect();
    assert_eq!(tagged, vec!["doc-eco"]);
    assert_eq!(store.tagged("ÉCONOMIE").len(), 1);
    assert_eq!(store.tagged("strasse").len(), 1);
    assert!(store.tagged("economie").is_empty());
}

#[test]
fn taxonomy_describes_a_context() {
    let store = ContentStore::from_json_slice(CORPUS.as_bytes()).unwrap();
    let context = CallerContext::new()
        .with_org("pub")
        .with_audience("council")
        .with_audience("press")
        .with_primary_driver("reg");

    let described = store.taxonomy().describe(&context);
    assert_eq!(described.org.as_deref(), Some("Public agency"));
    assert_eq!(described.audiences, vec!["City council", "press"]);
    assert_eq!(described.primary_driver.as_deref(), Some("Regulatory"));
    assert_eq!(described.secondary_driver, None);

    assert_eq!(store.taxonomy().describe(&CallerContext::new()).org, None);
}
