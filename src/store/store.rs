// Read-only after construction:
// no mutation
// no "update" methods
// lookups only

use std::collections::HashMap;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::content::{ContentNode, Document, Fact, KeyPoint, NextStep, NodeKind};
use crate::store::taxonomy::Taxonomy;
use crate::store::versioning::CorpusManifest;
use crate::trailhead::Trailhead;
use crate::types::identifiers::{NodeId, TrailheadId};

/// The list a browsing surface pages through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrowsePool {
    #[default]
    KeyPoints,
    Facts,
}

/// Immutable in-memory corpus.
///
/// Nodes are held in corpus order: documents, key points, facts, next steps,
/// each in dataset order. Cross-kind operations (search, browse defaults)
/// use this order.
#[derive(Debug)]
pub struct ContentStore {
    pub(crate) manifest: CorpusManifest,
    pub(crate) taxonomy: Taxonomy,
    pub(crate) nodes: Vec<ContentNode>,
    pub(crate) ranges: KindRanges,
    pub(crate) by_id: HashMap<NodeId, usize>,
    pub(crate) trailheads: Vec<Trailhead>,
    pub(crate) trailhead_index: HashMap<TrailheadId, usize>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct KindRanges {
    pub documents: Range<usize>,
    pub key_points: Range<usize>,
    pub facts: Range<usize>,
    pub next_steps: Range<usize>,
}

impl ContentStore {
    pub fn manifest(&self) -> &CorpusManifest {
        &self.manifest
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Every node, in corpus order.
    pub fn nodes(&self) -> &[ContentNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes_of(&self, kind: NodeKind) -> &[ContentNode] {
        let range = match kind {
            NodeKind::Document => &self.ranges.documents,
            NodeKind::KeyPoint => &self.ranges.key_points,
            NodeKind::Fact => &self.ranges.facts,
            NodeKind::NextStep => &self.ranges.next_steps,
        };
        &self.nodes[range.clone()]
    }

    pub fn documents(&self) -> &[ContentNode] {
        self.nodes_of(NodeKind::Document)
    }

    pub fn key_points(&self) -> &[ContentNode] {
        self.nodes_of(NodeKind::KeyPoint)
    }

    pub fn facts(&self) -> &[ContentNode] {
        self.nodes_of(NodeKind::Fact)
    }

    pub fn next_steps(&self) -> &[ContentNode] {
        self.nodes_of(NodeKind::NextStep)
    }

    pub fn pool(&self, pool: BrowsePool) -> &[ContentNode] {
        match pool {
            BrowsePool::KeyPoints => self.key_points(),
            BrowsePool::Facts => self.facts(),
        }
    }

    pub fn node(&self, id: &NodeId) -> Option<&ContentNode> {
        self.by_id.get(id).map(|&idx| &self.nodes[idx])
    }

    pub fn document(&self, id: &NodeId) -> Option<&Document> {
        self.node(id).and_then(ContentNode::as_document)
    }

    pub fn key_point(&self, id: &NodeId) -> Option<&KeyPoint> {
        self.node(id).and_then(ContentNode::as_key_point)
    }

    pub fn fact(&self, id: &NodeId) -> Option<&Fact> {
        self.node(id).and_then(ContentNode::as_fact)
    }

    pub fn next_step(&self, id: &NodeId) -> Option<&NextStep> {
        self.node(id).and_then(ContentNode::as_next_step)
    }

    pub fn trailheads(&self) -> &[Trailhead] {
        &self.trailheads
    }

    pub fn trailhead(&self, id: &TrailheadId) -> Option<&Trailhead> {
        self.trailhead_index.get(id).map(|&idx| &self.trailheads[idx])
    }

    /// Nodes carrying `tag` (case-insensitive), in corpus order.
    pub fn tagged(&self, tag: &str) -> Vec<&ContentNode> {
        self.nodes.iter().filter(|n| n.tags().contains(tag)).collect()
    }
}
