//! Context applicability.
//!
//! A node applies to a caller context when every dimension matches. A node
//! dimension that is `Unconstrained` always matches. A caller dimension that
//! is unset (`org = Any`, no audiences, no driver) is not checked.

use crate::content::NodeContexts;
use crate::types::{CallerContext, Selector};

pub fn org_matches(node: &NodeContexts, context: &CallerContext) -> bool {
    match &context.org {
        Selector::Any => true,
        Selector::Only(org) => node.orgs.admits(org),
    }
}

pub fn audience_matches(node: &NodeContexts, context: &CallerContext) -> bool {
    context.audiences.is_empty() || node.audiences.admits_any(&context.audiences)
}

/// Either the primary or the secondary driver is enough.
pub fn driver_matches(node: &NodeContexts, context: &CallerContext) -> bool {
    let mut drivers = context.drivers().peekable();
    if drivers.peek().is_none() {
        return true;
    }
    node.drivers.admits_any(drivers)
}

pub fn matches(node: &NodeContexts, context: &CallerContext) -> bool {
    org_matches(node, context) && audience_matches(node, context) && driver_matches(node, context)
}
