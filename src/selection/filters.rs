use crate::content::ContentNode;
use crate::selection::matcher;
use crate::types::{CallerContext, TextQuery};

/// True when `node` passes every active predicate: org, audience, driver, text.
pub fn passes(node: &ContentNode, context: &CallerContext, query: &TextQuery) -> bool {
    matcher::matches(node.contexts(), context)
        && (query.is_empty() || query.found_in(&node.visible_text()))
}

/// Stable filter over `pool`. Output keeps the pool's order.
pub fn filter<'a, I>(pool: I, context: &CallerContext) -> Vec<&'a ContentNode>
where
    I: IntoIterator<Item = &'a ContentNode>,
{
    let query = context.text_query();
    pool.into_iter()
        .filter(|node| passes(node, context, &query))
        .collect()
}
