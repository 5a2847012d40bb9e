pub mod context;
pub mod identifiers;
pub mod ranked;

pub use context::{CallerContext, Selector, TextQuery};
pub use identifiers::{
    validate_id, AudienceId, CorpusVersion, DriverId, IdError, NodeId, OrgId, TrailheadId,
};
pub use ranked::{compare_ranked, compare_titles, rank_and_truncate, RankedResult, ScoredNode};
