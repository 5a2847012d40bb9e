//! Browsing session as a pure reducer.
//!
//! `Idle → FiltersApplied → TrailheadApplied → FiltersApplied` is driven by
//! [`BrowseEvent`]s. The state holds no node references; the visible list is
//! recomputed from the store on demand.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::content::ContentNode;
use crate::selection::filters;
use crate::store::{BrowsePool, ContentStore};
use crate::trailhead::apply_trailhead;
use crate::types::identifiers::{AudienceId, DriverId, OrgId, TrailheadId};
use crate::types::{CallerContext, Selector};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    FiltersApplied,
    TrailheadApplied,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BrowseState {
    pub context: CallerContext,
    pub pool: BrowsePool,
    pub focus: usize,
    pub trailhead: Option<TrailheadId>,
    pub phase: Phase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseEvent {
    SetOrg(Selector<OrgId>),
    ToggleAudience(AudienceId),
    SetPrimaryDriver(Option<DriverId>),
    SetSecondaryDriver(Option<DriverId>),
    SetQuery(String),
    SwitchPool(BrowsePool),
    ApplyTrailhead(TrailheadId),
    ClearFilters,
    Focus(usize),
    Next,
    Previous,
}

impl BrowseState {
    pub fn new(pool: BrowsePool) -> Self {
        Self {
            pool,
            ..Self::default()
        }
    }

    pub fn visible<'a>(&self, store: &'a ContentStore) -> Vec<&'a ContentNode> {
        filters::filter(store.pool(self.pool), &self.context)
    }

    pub fn focused<'a>(&self, store: &'a ContentStore) -> Option<&'a ContentNode> {
        self.visible(store).get(self.focus).copied()
    }

    /// A context edit: new filters, focus back to the top, any trailhead dropped.
    fn with_context(mut self, context: CallerContext) -> Self {
        self.context = context;
        self.focus = 0;
        self.trailhead = None;
        self.phase = Phase::FiltersApplied;
        self
    }

    fn clamp_focus(mut self, store: &ContentStore) -> Self {
        let len = self.visible(store).len();
        self.focus = self.focus.min(len.saturating_sub(1));
        self
    }
}

pub fn reduce(state: BrowseState, event: BrowseEvent, store: &ContentStore) -> BrowseState {
    match event {
        BrowseEvent::SetOrg(org) => {
            let context = CallerContext {
                org,
                ..state.context.clone()
            };
            state.with_context(context)
        }
        BrowseEvent::ToggleAudience(audience) => {
            let mut context = state.context.clone();
            if !context.audiences.remove(&audience) {
                context.audiences.insert(audience);
            }
            state.with_context(context)
        }
        BrowseEvent::SetPrimaryDriver(driver) => {
            let context = CallerContext {
                primary_driver: Selector::from_option(driver).into_option(),
                ..state.context.clone()
            };
            state.with_context(context)
        }
        BrowseEvent::SetSecondaryDriver(driver) => {
            let context = CallerContext {
                secondary_driver: Selector::from_option(driver).into_option(),
                ..state.context.clone()
            };
            state.with_context(context)
        }
        BrowseEvent::SetQuery(query) => {
            let context = CallerContext {
                query,
                ..state.context.clone()
            };
            state.with_context(context)
        }
        BrowseEvent::SwitchPool(pool) => BrowseState {
            pool,
            focus: 0,
            ..state
        },
        BrowseEvent::ApplyTrailhead(id) => match store.trailhead(&id) {
            Some(trailhead) => {
                let application = apply_trailhead(trailhead, store, state.pool);
                BrowseState {
                    context: application.context,
                    pool: application.pool,
                    focus: application.focus_index,
                    trailhead: Some(id),
                    phase: Phase::TrailheadApplied,
                }
            }
            None => {
                debug!(trailhead = %id, "unknown trailhead; state unchanged");
                state
            }
        },
        BrowseEvent::ClearFilters => state.with_context(CallerContext::default()),
        BrowseEvent::Focus(index) => BrowseState {
            focus: index,
            ..state
        }
        .clamp_focus(store),
        BrowseEvent::Next => {
            let focus = state.focus.saturating_add(1);
            BrowseState { focus, ..state }.clamp_focus(store)
        }
        BrowseEvent::Previous => {
            let focus = state.focus.saturating_sub(1);
            BrowseState { focus, ..state }
        }
    }
}
