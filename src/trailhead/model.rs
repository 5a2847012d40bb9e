use serde::{Deserialize, Serialize};

use crate::types::identifiers::{AudienceId, DriverId, NodeId, OrgId, TrailheadId};
use crate::types::Selector;

/// Closed set of step kinds. Each maps to exactly one node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Point,
    Fact,
    Doc,
    Step,
}

/// Reference from a trailhead step to a content node of the given kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRef {
    pub kind: StepKind,
    #[serde(rename = "ref")]
    pub target: NodeId,
}

impl StepRef {
    pub fn new(kind: StepKind, target: impl Into<NodeId>) -> Self {
        Self {
            kind,
            target: target.into(),
        }
    }
}

/// One preferred value per dimension. Unset means the caller wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrailheadFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org: Option<OrgId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<DriverId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<AudienceId>,
}

impl TrailheadFilters {
    pub fn org_selector(&self) -> Selector<OrgId> {
        Selector::from_option(self.org.clone())
    }

    pub fn driver(&self) -> Option<DriverId> {
        Selector::from_option(self.driver.clone()).as_option().cloned()
    }

    pub fn audience(&self) -> Option<AudienceId> {
        Selector::from_option(self.audience.clone()).as_option().cloned()
    }
}

/// A curated, ordered path through the corpus with a default context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trailhead {
    pub id: TrailheadId,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub filters: TrailheadFilters,
    #[serde(default)]
    pub steps: Vec<StepRef>,
}

impl Trailhead {
    pub fn new(id: impl Into<TrailheadId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            summary: String::new(),
            filters: TrailheadFilters::default(),
            steps: Vec::new(),
        }
    }

    pub fn with_filters(mut self, filters: TrailheadFilters) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_step(mut self, kind: StepKind, target: impl Into<NodeId>) -> Self {
        self.steps.push(StepRef::new(kind, target));
        self
    }
}
