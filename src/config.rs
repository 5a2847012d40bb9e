//! Engine configuration.
//!
//! Ranking weights are fixed constants; they are not tunable at runtime.
//! Result-size limits live in [`EngineConfig`], which can be loaded from JSON
//! and falls back to the defaults below for any missing key.
//!
//! ```
//! use advocacy_context::config::EngineConfig;
//!
//! let config = EngineConfig::from_json(r#"{ "search_limit": 5 }"#).unwrap();
//! assert_eq!(config.search_limit, 5);
//! assert_eq!(config.browse_limit, advocacy_context::config::BROWSE_DEFAULT_LIMIT);
//! ```

use serde::{Deserialize, Serialize};

use crate::selection::DefaultSlicePolicy;

/// Caller-side wildcard sentinel for a single-valued dimension.
pub const ANY: &str = "any";

// =============================================================================
// Relevance weights
// =============================================================================

/// Awarded when a document explicitly names the caller's organization.
pub const ORG_MATCH_WEIGHT: f32 = 3.0;

/// Awarded when a document explicitly names the caller's primary driver.
pub const PRIMARY_DRIVER_WEIGHT: f32 = 2.0;

/// Awarded when a secondary driver is set and the document names it.
pub const SECONDARY_DRIVER_WEIGHT: f32 = 1.0;

/// Awarded once per caller audience the document names. Not capped.
pub const AUDIENCE_MATCH_WEIGHT: f32 = 1.5;

// =============================================================================
// Search scores
// =============================================================================

pub const TITLE_MATCH_SCORE: f32 = 3.0;
pub const BODY_MATCH_SCORE: f32 = 1.0;

// =============================================================================
// Result sizes
// =============================================================================

/// Maximum results for a non-empty omnibox query.
pub const SEARCH_RESULT_LIMIT: usize = 15;

/// Entries returned for an empty omnibox query.
pub const BROWSE_DEFAULT_LIMIT: usize = 10;

/// Documents returned by the recommendation fallback.
pub const DEFAULT_SLICE_SIZE: usize = 3;

pub const DEFAULT_RECOMMEND_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub search_limit: usize,
    pub browse_limit: usize,
    pub recommend_limit: usize,
    pub default_slice: DefaultSlicePolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_limit: SEARCH_RESULT_LIMIT,
            browse_limit: BROWSE_DEFAULT_LIMIT,
            recommend_limit: DEFAULT_RECOMMEND_LIMIT,
            default_slice: DefaultSlicePolicy::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
