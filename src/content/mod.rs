pub mod constraint;
pub mod node;
pub mod tags;

pub use crate::types::identifiers::{AudienceId, DriverId, NodeId, OrgId};
pub use constraint::Constraint;
pub use node::{ContentNode, Document, Fact, KeyPoint, NextStep, NodeContexts, NodeKind};
pub use tags::Tags;
