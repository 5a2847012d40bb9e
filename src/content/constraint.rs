use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Node-side constraint on one context dimension.
///
/// In the corpus this is a plain list. An empty (or missing) list means the
/// node applies to every value of the dimension, so it deserializes to
/// `Unconstrained`, never to an empty `OneOf`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint<T: Ord> {
    Unconstrained,
    OneOf(BTreeSet<T>),
}

impl<T: Ord> Default for Constraint<T> {
    fn default() -> Self {
        Constraint::Unconstrained
    }
}

impl<T: Ord> From<BTreeSet<T>> for Constraint<T> {
    fn from(values: BTreeSet<T>) -> Self {
        if values.is_empty() {
            Constraint::Unconstrained
        } else {
            Constraint::OneOf(values)
        }
    }
}

impl<T: Ord> FromIterator<T> for Constraint<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Constraint::from(iter.into_iter().collect::<BTreeSet<T>>())
    }
}

impl<T: Ord> Constraint<T> {
    pub fn is_unconstrained(&self) -> bool {
        matches!(self, Constraint::Unconstrained)
    }

    /// Wildcard-aware membership: `Unconstrained` admits every value.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Constraint::Unconstrained => true,
            Constraint::OneOf(values) => values.contains(value),
        }
    }

    /// True when the constraint is a wildcard or shares a value with `candidates`.
    pub fn admits_any<'a, I>(&self, candidates: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        match self {
            Constraint::Unconstrained => true,
            Constraint::OneOf(values) => candidates.into_iter().any(|c| values.contains(c)),
        }
    }

    /// Membership without the wildcard: only an explicit tag counts.
    pub fn names(&self, value: &T) -> bool {
        match self {
            Constraint::Unconstrained => false,
            Constraint::OneOf(values) => values.contains(value),
        }
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        let values = match self {
            Constraint::Unconstrained => None,
            Constraint::OneOf(values) => Some(values.iter()),
        };
        values.into_iter().flatten()
    }
}

impl<T: Ord + Serialize> Serialize for Constraint<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.values())
    }
}

impl<'de, T: Ord + Deserialize<'de>> Deserialize<'de> for Constraint<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Option::<BTreeSet<T>>::deserialize(deserializer)?;
        Ok(values.map(Constraint::from).unwrap_or_default())
    }
}
