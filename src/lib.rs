//! Deterministic context matching and relevance ranking for a curated
//! advocacy corpus.
//!
//! `advocacy-context` loads a static corpus of documents, key points, facts,
//! next steps and trailheads once, then answers read-only questions about it:
//! which nodes apply to a caller context, which documents to recommend,
//! which nodes match a free-text search, and how a trailhead resolves. All
//! operations are pure. Identical inputs always produce identical outputs.

pub mod config;
pub mod content;
pub mod selection;
pub mod session;
pub mod store;
pub mod trailhead;
pub mod types;

pub use content::{ContentNode, NodeKind};
pub use store::{ContentStore, CorpusError};
pub use types::{CallerContext, RankedResult, Selector};
