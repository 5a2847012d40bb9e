use std::collections::BTreeSet;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::ANY;
use crate::types::identifiers::{AudienceId, DriverId, OrgId};

/// Caller-side choice for a single-valued dimension.
///
/// `Any` means "do not constrain this dimension" and is written as the
/// string `"any"` on the wire. This is distinct from a node-side wildcard,
/// see [`Constraint`](crate::content::Constraint).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector<T> {
    Any,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::Any
    }
}

impl<T> Selector<T> {
    pub fn only(value: impl Into<T>) -> Self {
        Selector::Only(value.into())
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Selector::Any)
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Selector::Any => None,
            Selector::Only(value) => Some(value),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Selector::Any => None,
            Selector::Only(value) => Some(value),
        }
    }
}

impl<T: AsRef<str>> Selector<T> {
    /// `None` and the literal `"any"` both become `Any`.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) if value.as_ref() != ANY => Selector::Only(value),
            _ => Selector::Any,
        }
    }
}

impl<T: Serialize> Serialize for Selector<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Selector::Any => serializer.serialize_str(ANY),
            Selector::Only(value) => value.serialize(serializer),
        }
    }
}

impl<'de, T: From<String>> Deserialize<'de> for Selector<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SelectorVisitor<T>(PhantomData<T>);

        impl<'de, T: From<String>> Visitor<'de> for SelectorVisitor<T> {
            type Value = Selector<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "an identifier string, \"{ANY}\", or null")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                if v == ANY || v.is_empty() {
                    Ok(Selector::Any)
                } else {
                    Ok(Selector::Only(T::from(v.to_string())))
                }
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(Selector::Any)
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(Selector::Any)
            }
        }

        deserializer.deserialize_any(SelectorVisitor(PhantomData))
    }
}

/// The context a caller browses under.
///
/// Built and owned by the caller; the engine only reads it. Unset
/// dimensions (`org = Any`, no audiences, no drivers) impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallerContext {
    pub org: Selector<OrgId>,
    pub audiences: BTreeSet<AudienceId>,
    #[serde(deserialize_with = "driver_or_any")]
    pub primary_driver: Option<DriverId>,
    #[serde(deserialize_with = "driver_or_any")]
    pub secondary_driver: Option<DriverId>,
    pub query: String,
}

impl CallerContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// `"any"` leaves the org unconstrained.
    pub fn with_org(mut self, org: impl Into<OrgId>) -> Self {
        self.org = Selector::from_option(Some(org.into()));
        self
    }

    pub fn with_audience(mut self, audience: impl Into<AudienceId>) -> Self {
        self.audiences.insert(audience.into());
        self
    }

    /// `"any"` clears the driver.
    pub fn with_primary_driver(mut self, driver: impl Into<DriverId>) -> Self {
        self.primary_driver = Selector::from_option(Some(driver.into())).into_option();
        self
    }

    pub fn with_secondary_driver(mut self, driver: impl Into<DriverId>) -> Self {
        self.secondary_driver = Selector::from_option(Some(driver.into())).into_option();
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Primary then secondary driver, whichever are set.
    pub fn drivers(&self) -> impl Iterator<Item = &DriverId> {
        self.primary_driver
            .iter()
            .chain(self.secondary_driver.iter())
    }

    pub fn text_query(&self) -> TextQuery {
        TextQuery::new(self.query.as_str())
    }
}

/// Drivers use the same wire sentinel as the org: `"any"`, `""` and null all
/// mean no driver.
fn driver_or_any<'de, D>(deserializer: D) -> Result<Option<DriverId>, D::Error>
where
    D: Deserializer<'de>,
{
    Selector::<DriverId>::deserialize(deserializer).map(Selector::into_option)
}

/// A normalized free-text query.
/// Normalization rules:
/// - Trim surrounding whitespace
/// - Lowercase
/// - Matching is substring containment, not term splitting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextQuery {
    pub raw: String,
    pub needle: String,
}

impl TextQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let needle = raw.trim().to_lowercase();

        Self { raw, needle }
    }

    /// Empty and whitespace-only queries pass every text predicate.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Case-insensitive substring test. An empty query matches everything.
    pub fn found_in(&self, haystack: &str) -> bool {
        self.is_empty() || haystack.to_lowercase().contains(&self.needle)
    }
}
