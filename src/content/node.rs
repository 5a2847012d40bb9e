use serde::{Deserialize, Serialize};

use super::constraint::Constraint;
use super::tags::Tags;
use crate::types::identifiers::{AudienceId, DriverId, NodeId, OrgId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Document,
    KeyPoint,
    Fact,
    NextStep,
}

/// Which organizations, audiences and drivers a node applies to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NodeContexts {
    #[serde(default)]
    pub orgs: Constraint<OrgId>,
    #[serde(default)]
    pub audiences: Constraint<AudienceId>,
    #[serde(default)]
    pub drivers: Constraint<DriverId>,
}

impl NodeContexts {
    /// Full wildcard: applies everywhere.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn with_orgs<I, S>(mut self, orgs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OrgId>,
    {
        self.orgs = orgs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_audiences<I, S>(mut self, audiences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<AudienceId>,
    {
        self.audiences = audiences.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_drivers<I, S>(mut self, drivers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<DriverId>,
    {
        self.drivers = drivers.into_iter().map(Into::into).collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: NodeId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub tags: Tags,
    #[serde(default)]
    pub contexts: NodeContexts,
}

impl Document {
    pub fn new(id: impl Into<NodeId>, title: impl Into<String>) -> Self {
        Document {
            id: id.into(),
            title: title.into(),
            description: None,
            body: String::new(),
            url: None,
            tags: Tags::new(),
            contexts: NodeContexts::any(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_contexts(mut self, contexts: NodeContexts) -> Self {
        self.contexts = contexts;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().collect();
        self
    }
}

/// A single argument the caller can make.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyPoint {
    pub id: NodeId,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub tags: Tags,
    #[serde(default)]
    pub contexts: NodeContexts,
}

impl KeyPoint {
    pub fn new(id: impl Into<NodeId>, title: impl Into<String>, body: impl Into<String>) -> Self {
        KeyPoint {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            tags: Tags::new(),
            contexts: NodeContexts::any(),
        }
    }

    pub fn with_contexts(mut self, contexts: NodeContexts) -> Self {
        self.contexts = contexts;
        self
    }
}

/// An evidentiary claim with its support and, optionally, where it comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    pub id: NodeId,
    pub claim: String,
    #[serde(default)]
    pub support: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default)]
    pub tags: Tags,
    #[serde(default)]
    pub contexts: NodeContexts,
}

impl Fact {
    pub fn new(id: impl Into<NodeId>, claim: impl Into<String>, support: impl Into<String>) -> Self {
        Fact {
            id: id.into(),
            claim: claim.into(),
            support: support.into(),
            source: None,
            tags: Tags::new(),
            contexts: NodeContexts::any(),
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_contexts(mut self, contexts: NodeContexts) -> Self {
        self.contexts = contexts;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextStep {
    pub id: NodeId,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default)]
    pub tags: Tags,
    #[serde(default)]
    pub contexts: NodeContexts,
}

impl NextStep {
    pub fn new(id: impl Into<NodeId>, text: impl Into<String>) -> Self {
        NextStep {
            id: id.into(),
            text: text.into(),
            detail: None,
            tags: Tags::new(),
            contexts: NodeContexts::any(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_contexts(mut self, contexts: NodeContexts) -> Self {
        self.contexts = contexts;
        self
    }
}

/// The atomic unit of curated content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentNode {
    Document(Document),
    KeyPoint(KeyPoint),
    Fact(Fact),
    NextStep(NextStep),
}

impl ContentNode {
    pub fn id(&self) -> &NodeId {
        match self {
            ContentNode::Document(d) => &d.id,
            ContentNode::KeyPoint(k) => &k.id,
            ContentNode::Fact(f) => &f.id,
            ContentNode::NextStep(s) => &s.id,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            ContentNode::Document(_) => NodeKind::Document,
            ContentNode::KeyPoint(_) => NodeKind::KeyPoint,
            ContentNode::Fact(_) => NodeKind::Fact,
            ContentNode::NextStep(_) => NodeKind::NextStep,
        }
    }

    /// Title, claim or step text, depending on kind.
    pub fn headline(&self) -> &str {
        match self {
            ContentNode::Document(d) => &d.title,
            ContentNode::KeyPoint(k) => &k.title,
            ContentNode::Fact(f) => &f.claim,
            ContentNode::NextStep(s) => &s.text,
        }
    }

    /// Body, support or step detail, depending on kind.
    pub fn body(&self) -> &str {
        match self {
            ContentNode::Document(d) => &d.body,
            ContentNode::KeyPoint(k) => &k.body,
            ContentNode::Fact(f) => &f.support,
            ContentNode::NextStep(s) => s.detail.as_deref().unwrap_or(""),
        }
    }

    /// Short secondary line: a document's description or a fact's source.
    pub fn description(&self) -> &str {
        match self {
            ContentNode::Document(d) => d.description.as_deref().unwrap_or(""),
            ContentNode::Fact(f) => f.source.as_deref().unwrap_or(""),
            ContentNode::KeyPoint(_) | ContentNode::NextStep(_) => "",
        }
    }

    pub fn tags(&self) -> &Tags {
        match self {
            ContentNode::Document(d) => &d.tags,
            ContentNode::KeyPoint(k) => &k.tags,
            ContentNode::Fact(f) => &f.tags,
            ContentNode::NextStep(s) => &s.tags,
        }
    }

    pub fn contexts(&self) -> &NodeContexts {
        match self {
            ContentNode::Document(d) => &d.contexts,
            ContentNode::KeyPoint(k) => &k.contexts,
            ContentNode::Fact(f) => &f.contexts,
            ContentNode::NextStep(s) => &s.contexts,
        }
    }

    /// User-visible text the free-text filter searches: headline then body.
    pub fn visible_text(&self) -> String {
        format!("{} {}", self.headline(), self.body())
    }

    pub fn as_document(&self) -> Option<&Document> {
        match self {
            ContentNode::Document(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_key_point(&self) -> Option<&KeyPoint> {
        match self {
            ContentNode::KeyPoint(k) => Some(k),
            _ => None,
        }
    }

    pub fn as_fact(&self) -> Option<&Fact> {
        match self {
            ContentNode::Fact(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_next_step(&self) -> Option<&NextStep> {
        match self {
            ContentNode::NextStep(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Document> for ContentNode {
    fn from(d: Document) -> Self {
        ContentNode::Document(d)
    }
}

impl From<KeyPoint> for ContentNode {
    fn from(k: KeyPoint) -> Self {
        ContentNode::KeyPoint(k)
    }
}

impl From<Fact> for ContentNode {
    fn from(f: Fact) -> Self {
        ContentNode::Fact(f)
    }
}

impl From<NextStep> for ContentNode {
    fn from(s: NextStep) -> Self {
        ContentNode::NextStep(s)
    }
}
