use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, instrument};

use crate::content::{ContentNode, Document, Fact, KeyPoint, NextStep};
use crate::store::store::{ContentStore, KindRanges};
use crate::store::taxonomy::{Taxonomy, TaxonomyEntry};
use crate::store::versioning::{CorpusCounts, CorpusManifest};
use crate::trailhead::Trailhead;
use crate::types::identifiers::{
    validate_id, AudienceId, CorpusVersion, DriverId, IdError, NodeId, OrgId, TrailheadId,
};

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Duplicate node ID: {0}")]
    DuplicateNodeId(String),
    #[error("Duplicate trailhead ID: {0}")]
    DuplicateTrailheadId(String),
    #[error("Invalid identifier {id:?}: {source}")]
    InvalidId {
        id: String,
        #[source]
        source: IdError,
    },
}

/// The static dataset shape. Every collection is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Corpus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub organizations: Vec<TaxonomyEntry<OrgId>>,
    pub audiences: Vec<TaxonomyEntry<AudienceId>>,
    pub drivers: Vec<TaxonomyEntry<DriverId>>,
    pub documents: Vec<Document>,
    pub key_points: Vec<KeyPoint>,
    pub facts: Vec<Fact>,
    pub next_steps: Vec<NextStep>,
    pub trailheads: Vec<Trailhead>,
}

fn check_id(raw: &str) -> Result<(), CorpusError> {
    validate_id(raw).map_err(|source| CorpusError::InvalidId {
        id: raw.to_string(),
        source,
    })
}

impl ContentStore {
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, CorpusError> {
        let corpus: Corpus = serde_json::from_slice(bytes)?;
        Self::build(corpus, CorpusVersion::from_content(bytes))
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, CorpusError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_json_slice(&bytes)
    }

    pub fn from_path(path: &Path) -> Result<Self, CorpusError> {
        let bytes = fs::read(path)?;
        Self::from_json_slice(&bytes)
    }

    /// Build from an in-memory corpus. The version hashes its canonical JSON.
    pub fn from_corpus(corpus: Corpus) -> Result<Self, CorpusError> {
        let canonical = serde_json::to_vec(&corpus)?;
        Self::build(corpus, CorpusVersion::from_content(&canonical))
    }

    /// Single pass: validate ids, reject duplicates, lay nodes out in corpus order.
    #[instrument(skip_all, fields(version = %version))]
    fn build(corpus: Corpus, version: CorpusVersion) -> Result<Self, CorpusError> {
        let Corpus {
            version: dataset_label,
            organizations,
            audiences,
            drivers,
            documents,
            key_points,
            facts,
            next_steps,
            trailheads,
        } = corpus;

        let counts = CorpusCounts {
            documents: documents.len(),
            key_points: key_points.len(),
            facts: facts.len(),
            next_steps: next_steps.len(),
            trailheads: trailheads.len(),
        };

        let mut nodes = Vec::with_capacity(counts.nodes());
        let mut ranges = KindRanges::default();

        let start = nodes.len();
        nodes.extend(documents.into_iter().map(ContentNode::Document));
        ranges.documents = start..nodes.len();

        let start = nodes.len();
        nodes.extend(key_points.into_iter().map(ContentNode::KeyPoint));
        ranges.key_points = start..nodes.len();

        let start = nodes.len();
        nodes.extend(facts.into_iter().map(ContentNode::Fact));
        ranges.facts = start..nodes.len();

        let start = nodes.len();
        nodes.extend(next_steps.into_iter().map(ContentNode::NextStep));
        ranges.next_steps = start..nodes.len();

        let mut by_id: HashMap<NodeId, usize> = HashMap::with_capacity(nodes.len());
        for (idx, node) in nodes.iter().enumerate() {
            check_id(node.id().as_str())?;
            if by_id.insert(node.id().clone(), idx).is_some() {
                return Err(CorpusError::DuplicateNodeId(node.id().to_string()));
            }
        }

        // Dangling step refs are allowed here; they are skipped at resolve time.
        let mut trailhead_index: HashMap<TrailheadId, usize> =
            HashMap::with_capacity(trailheads.len());
        for (idx, trailhead) in trailheads.iter().enumerate() {
            check_id(trailhead.id.as_str())?;
            if trailhead_index.insert(trailhead.id.clone(), idx).is_some() {
                return Err(CorpusError::DuplicateTrailheadId(trailhead.id.to_string()));
            }
        }

        info!(
            documents = counts.documents,
            key_points = counts.key_points,
            facts = counts.facts,
            next_steps = counts.next_steps,
            trailheads = counts.trailheads,
            "content store loaded"
        );

        // Note: loaded_at is strictly informational
        let manifest = CorpusManifest {
            version,
            dataset_label,
            loaded_at: Utc::now(),
            counts,
        };

        Ok(ContentStore {
            manifest,
            taxonomy: Taxonomy {
                organizations,
                audiences,
                drivers,
            },
            nodes,
            ranges,
            by_id,
            trailheads,
            trailhead_index,
        })
    }
}
