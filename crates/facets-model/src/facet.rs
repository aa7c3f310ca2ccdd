//! Facet definitions, options and per-facet display configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::FacetValue;

/// Options loaded for each facet, keyed by facet id.
///
/// The order inside each `Vec` is the order the options arrived in and is
/// kept for "select all" and default rendering.
pub type FacetOptionsIndex = BTreeMap<String, Vec<FacetOption>>;

/// A filterable dimension shown in the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetDefinition {
    /// Unique facet identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Field the facet filters on. Falls back to `id` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Options are fixed and never refetched.
    #[serde(default)]
    pub is_static: bool,
    /// Options are only fetched once the facet is expanded.
    #[serde(default)]
    pub is_lazy: bool,
}

impl FacetDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            property_path: None,
            description: None,
            is_static: false,
            is_lazy: false,
        }
    }

    #[must_use]
    pub fn with_property_path(mut self, path: impl Into<String>) -> Self {
        self.property_path = Some(path.into());
        self
    }

    /// Field used when building filter expressions.
    pub fn property_path(&self) -> &str {
        self.property_path.as_deref().unwrap_or(&self.id)
    }
}

/// One selectable value of a facet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetOption {
    pub display_name: String,
    pub value: FacetValue,
    /// Number of records matching this option under the current filters.
    #[serde(default)]
    pub matches_count: u64,
}

impl FacetOption {
    pub fn new(display_name: impl Into<String>, value: impl Into<FacetValue>) -> Self {
        Self {
            display_name: display_name.into(),
            value: value.into(),
            matches_count: 0,
        }
    }

    #[must_use]
    pub fn with_matches_count(mut self, count: u64) -> Self {
        self.matches_count = count;
        self
    }

    /// Canonical selection key of this option's value.
    pub fn key(&self) -> String {
        self.value.to_key()
    }
}

/// Ordering used when presenting a facet's options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionSort {
    /// Keep the order options were loaded in.
    #[default]
    AsLoaded,
    /// Case-insensitive by display name.
    Alphabetical,
    /// Highest match count first, ties by display name.
    MatchesCount,
}

impl OptionSort {
    /// Returns the options in presentation order.
    pub fn sorted<'a>(&self, options: &'a [FacetOption]) -> Vec<&'a FacetOption> {
        let mut ordered: Vec<&FacetOption> = options.iter().collect();
        match self {
            Self::AsLoaded => {}
            Self::Alphabetical => {
                ordered.sort_by_key(|option| option.display_name.to_lowercase());
            }
            Self::MatchesCount => ordered.sort_by(|a, b| {
                b.matches_count
                    .cmp(&a.matches_count)
                    .then_with(|| a.display_name.cmp(&b.display_name))
            }),
        }
        ordered
    }
}

/// Display configuration for a single facet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacetConfig {
    /// Overrides the facet's own name in the panel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub sort: OptionSort,
}

/// Display configuration for the whole panel, keyed by facet id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacetsConfig(pub BTreeMap<String, FacetConfig>);

impl FacetsConfig {
    pub fn get(&self, facet_id: &str) -> Option<&FacetConfig> {
        self.0.get(facet_id)
    }

    /// Sort order for a facet, defaulting to load order.
    pub fn sort_for(&self, facet_id: &str) -> OptionSort {
        self.get(facet_id).map(|config| config.sort).unwrap_or_default()
    }

    /// Label for a facet, falling back to the definition's name.
    pub fn label_for<'a>(&'a self, facet: &'a FacetDefinition) -> &'a str {
        self.get(&facet.id)
            .and_then(|config| config.label.as_deref())
            .unwrap_or(&facet.name)
    }
}
