//! The plain data behind a [`FacetSelectionStore`](crate::FacetSelectionStore).

use std::collections::{BTreeMap, BTreeSet};

use facets_model::{FacetDefinition, FacetOption, FacetOptionsIndex, FacetsConfig};
use serde::Serialize;

use crate::queries::QueriesState;
use crate::selection::{ALL_SELECTED, FacetsState, Selection};
use crate::token::RefreshToken;

/// Every slot of the facets panel.
///
/// Subscribers receive this after each mutation; the store is the only
/// writer.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FacetsPanelState {
    pub(crate) facets_config: Option<FacetsConfig>,
    pub(crate) facets: Option<Vec<FacetDefinition>>,
    pub(crate) facet_options: Option<FacetOptionsIndex>,
    pub(crate) facet_options_loading_state: BTreeMap<String, String>,
    pub(crate) queries_state: QueriesState,
    pub(crate) facets_state: FacetsState,
    pub(crate) dirty_facet_ids: BTreeSet<String>,
    pub(crate) facets_state_refresh_token: Option<RefreshToken>,
    pub(crate) is_facets_state_initialized_from_query_params: bool,
    pub(crate) is_initial_state_handled: bool,
    pub(crate) changed_facet_id: Option<String>,
    pub(crate) are_options_re_loading: bool,
    pub(crate) are_options_loading: bool,
}

impl FacetsPanelState {
    pub fn facets_config(&self) -> Option<&FacetsConfig> {
        self.facets_config.as_ref()
    }

    pub fn facets(&self) -> Option<&[FacetDefinition]> {
        self.facets.as_deref()
    }

    pub fn facet_options(&self) -> Option<&FacetOptionsIndex> {
        self.facet_options.as_ref()
    }

    /// Loaded options for one facet; empty when nothing is loaded.
    pub fn options_for(&self, facet_id: &str) -> &[FacetOption] {
        self.facet_options
            .as_ref()
            .and_then(|index| index.get(facet_id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn facet_options_loading_state(&self) -> &BTreeMap<String, String> {
        &self.facet_options_loading_state
    }

    pub fn queries_state(&self) -> &QueriesState {
        &self.queries_state
    }

    pub fn facets_state(&self) -> &FacetsState {
        &self.facets_state
    }

    /// Selection of one facet, [`Selection::AllSelected`] when untouched.
    pub fn selection(&self, facet_id: &str) -> &Selection {
        self.facets_state.get(facet_id).unwrap_or(&ALL_SELECTED)
    }

    pub fn dirty_facet_ids(&self) -> &BTreeSet<String> {
        &self.dirty_facet_ids
    }

    pub fn is_dirty(&self, facet_id: &str) -> bool {
        self.dirty_facet_ids.contains(facet_id)
    }

    pub fn refresh_token(&self) -> Option<RefreshToken> {
        self.facets_state_refresh_token
    }

    pub fn is_facets_state_initialized_from_query_params(&self) -> bool {
        self.is_facets_state_initialized_from_query_params
    }

    pub fn is_initial_state_handled(&self) -> bool {
        self.is_initial_state_handled
    }

    /// Facet touched by the most recent user selection.
    pub fn changed_facet_id(&self) -> Option<&str> {
        self.changed_facet_id.as_deref()
    }

    pub fn are_options_loading(&self) -> bool {
        self.are_options_loading
    }

    pub fn are_options_re_loading(&self) -> bool {
        self.are_options_re_loading
    }
}
