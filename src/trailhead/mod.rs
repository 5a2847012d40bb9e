pub mod model;
pub mod resolver;

pub use model::{StepKind, StepRef, Trailhead, TrailheadFilters};
pub use resolver::{
    apply_trailhead, pick_primary_step, pool_for_step, resolve_step, resolve_steps,
    trailhead_context, ResolvedStep, TrailheadApplication,
};
