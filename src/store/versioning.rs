use chrono::{DateTime, Utc};

use crate::types::identifiers::CorpusVersion;

// Key point:
// Serializable
// Counts are authoritative, loaded_at is not
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct CorpusCounts {
    pub documents: usize,
    pub key_points: usize,
    pub facts: usize,
    pub next_steps: usize,
    pub trailheads: usize,
}

impl CorpusCounts {
    pub fn nodes(&self) -> usize {
        self.documents + self.key_points + self.facts + self.next_steps
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CorpusManifest {
    pub version: CorpusVersion,
    /// Release label declared by the dataset itself, if any.
    pub dataset_label: Option<String>,
    pub loaded_at: DateTime<Utc>, // informational only
    pub counts: CorpusCounts,
}
