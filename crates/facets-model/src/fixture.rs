//! Whole-panel fixtures: config, facet definitions and loaded options in one document.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FacetsError, Result};
use crate::facet::{FacetDefinition, FacetOptionsIndex, FacetsConfig};

/// Everything the fetch layer would normally deliver to a panel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelFixture {
    pub config: FacetsConfig,
    pub facets: Vec<FacetDefinition>,
    pub options: FacetOptionsIndex,
}

impl PanelFixture {
    /// Parse and validate a fixture from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let fixture: Self = serde_json::from_str(content)?;
        fixture.validate()?;
        Ok(fixture)
    }

    /// Read, parse and validate a fixture file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Facet ids must be unique and every options entry must belong to a defined facet.
    pub fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for facet in &self.facets {
            if !seen.insert(facet.id.as_str()) {
                return Err(FacetsError::DuplicateFacet(facet.id.clone()));
            }
        }
        if let Some(unknown) = self.options.keys().find(|id| !seen.contains(id.as_str())) {
            return Err(FacetsError::UnknownFacet(unknown.clone()));
        }
        Ok(())
    }

    pub fn facet(&self, facet_id: &str) -> Option<&FacetDefinition> {
        self.facets.iter().find(|facet| facet.id == facet_id)
    }
}
