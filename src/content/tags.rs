use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Free-form labels on a content node. Insertion order is irrelevant.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tags {
    inner: BTreeSet<String>,
}

impl Tags {
    pub fn new() -> Self {
        Tags {
            inner: BTreeSet::new(),
        }
    }

    pub fn insert(&mut self, tag: impl Into<String>) {
        self.inner.insert(tag.into());
    }

    /// Case-insensitive lookup, Unicode lower-casing on both sides.
    pub fn contains(&self, tag: &str) -> bool {
        let needle = tag.to_lowercase();
        self.inner.iter().any(|t| t.to_lowercase() == needle)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.inner.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Tags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Tags {
            inner: iter.into_iter().map(Into::into).collect(),
        }
    }
}
