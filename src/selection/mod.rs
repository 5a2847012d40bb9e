pub mod fallback;
pub mod filters;
pub mod matcher;
pub mod relevance;
pub mod search;

pub use fallback::DefaultSlicePolicy;
pub use filters::filter;
pub use matcher::matches;
pub use relevance::{recommend, Recommender, ScoreBreakdown, Scorer, WeightedContextScorer};
pub use search::{rank, SearchProjection, SearchRanker};
