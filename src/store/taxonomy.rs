use serde::{Deserialize, Serialize};

use crate::types::identifiers::{AudienceId, DriverId, OrgId};
use crate::types::CallerContext;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyEntry<I> {
    pub id: I,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl<I> TaxonomyEntry<I> {
    pub fn new(id: impl Into<I>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
        }
    }
}

/// The three small lookup tables shipped with a corpus.
///
/// Tables are a handful of rows each, so lookups are linear scans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    pub organizations: Vec<TaxonomyEntry<OrgId>>,
    pub audiences: Vec<TaxonomyEntry<AudienceId>>,
    pub drivers: Vec<TaxonomyEntry<DriverId>>,
}

/// Display names for a caller context. `None` org means "any".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextDescription {
    pub org: Option<String>,
    pub audiences: Vec<String>,
    pub primary_driver: Option<String>,
    pub secondary_driver: Option<String>,
}

fn find<'a, I: PartialEq>(table: &'a [TaxonomyEntry<I>], id: &I) -> Option<&'a TaxonomyEntry<I>> {
    table.iter().find(|entry| &entry.id == id)
}

impl Taxonomy {
    pub fn organization(&self, id: &OrgId) -> Option<&TaxonomyEntry<OrgId>> {
        find(&self.organizations, id)
    }

    pub fn audience(&self, id: &AudienceId) -> Option<&TaxonomyEntry<AudienceId>> {
        find(&self.audiences, id)
    }

    pub fn driver(&self, id: &DriverId) -> Option<&TaxonomyEntry<DriverId>> {
        find(&self.drivers, id)
    }

    /// Resolve display names. Unknown ids fall back to the raw id.
    pub fn describe(&self, context: &CallerContext) -> ContextDescription {
        let driver_name = |id: &DriverId| {
            self.driver(id)
                .map(|e| e.name.clone())
                .unwrap_or_else(|| id.to_string())
        };

        ContextDescription {
            org: context.org.as_option().map(|id| {
                self.organization(id)
                    .map(|e| e.name.clone())
                    .unwrap_or_else(|| id.to_string())
            }),
            audiences: context
                .audiences
                .iter()
                .map(|id| {
                    self.audience(id)
                        .map(|e| e.name.clone())
                        .unwrap_or_else(|| id.to_string())
                })
                .collect(),
            primary_driver: context.primary_driver.as_ref().map(driver_name),
            secondary_driver: context.secondary_driver.as_ref().map(driver_name),
        }
    }
}
