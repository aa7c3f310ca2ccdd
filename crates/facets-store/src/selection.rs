//! Per-facet selection values.

use std::collections::{BTreeMap, BTreeSet};

use facets_model::FacetOption;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// Selection for every facet that has one, keyed by facet id.
///
/// A facet without an entry reads as [`Selection::AllSelected`].
pub type FacetsState = BTreeMap<String, Selection>;

pub(crate) static ALL_SELECTED: Selection = Selection::AllSelected;

const ALL_TAG: &str = "all";

/// Which options of a facet are selected.
///
/// `AllSelected` is the untouched default and needs no loaded options.
/// `Explicit` holds canonical option keys; an empty set selects nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    AllSelected,
    Explicit(BTreeSet<String>),
}

impl Selection {
    pub fn explicit<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Explicit(keys.into_iter().map(Into::into).collect())
    }

    /// Explicit selection of every loaded option.
    pub fn from_options(options: &[FacetOption]) -> Self {
        Self::Explicit(options.iter().map(FacetOption::key).collect())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::AllSelected)
    }

    /// Selected keys, or `None` while the facet is implicitly all-selected.
    pub fn keys(&self) -> Option<&BTreeSet<String>> {
        match self {
            Self::AllSelected => None,
            Self::Explicit(keys) => Some(keys),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        match self {
            Self::AllSelected => true,
            Self::Explicit(keys) => keys.contains(key),
        }
    }

    /// New selection with `key` flipped.
    ///
    /// An implicit all-selection is first materialized from `options`, so
    /// toggling from the default deselects exactly one loaded option.
    #[must_use]
    pub fn toggled(&self, key: &str, options: &[FacetOption]) -> Self {
        match self {
            Self::AllSelected => Self::Explicit(
                options
                    .iter()
                    .map(FacetOption::key)
                    .filter(|option_key| option_key != key)
                    .collect(),
            ),
            Self::Explicit(keys) => {
                let mut keys = keys.clone();
                if !keys.remove(key) {
                    keys.insert(key.to_string());
                }
                Self::Explicit(keys)
            }
        }
    }
}

impl Serialize for Selection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::AllSelected => serializer.serialize_str(ALL_TAG),
            Self::Explicit(keys) => keys.serialize(serializer),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SelectionRepr {
    Tag(String),
    Keys(BTreeSet<String>),
}

impl<'de> Deserialize<'de> for Selection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match SelectionRepr::deserialize(deserializer)? {
            SelectionRepr::Tag(tag) if tag == ALL_TAG => Ok(Self::AllSelected),
            SelectionRepr::Tag(tag) => Err(de::Error::custom(format!(
                "expected \"{ALL_TAG}\" or a list of option keys, got \"{tag}\""
            ))),
            SelectionRepr::Keys(keys) => Ok(Self::Explicit(keys)),
        }
    }
}
