//! The facets panel store.
//!
//! # Selection lifecycle
//!
//! A facet starts out implicitly all-selected. The first user action on it
//! materializes an explicit key set from whatever options are loaded at that
//! moment, so hosts should only enable option checkboxes once the options
//! have arrived.
//!
//! User actions (`toggle`, `select_one`, `select_all`) always issue a new
//! refresh token, record the facet as changed and mark it dirty.
//! `patch_facets_state` is the programmatic path (restoring from URL
//! parameters): it issues a token only if none exists yet and never marks
//! facets dirty. `clear_filters` drops every selection and dirty mark.

use std::collections::{BTreeMap, BTreeSet};

use facets_model::{FacetDefinition, FacetOptionsIndex, FacetValue, FacetsConfig};
use tracing::debug;

use crate::queries::{QueriesState, build_queries};
use crate::selection::{FacetsState, Selection};
use crate::state::FacetsPanelState;
use crate::subscriber::{Slot, StoreChange, Subscribers, SubscriptionId};
use crate::token::TokenSource;

/// Slots written by every user selection action.
const USER_SELECTION_SLOTS: [Slot; 4] = [
    Slot::FacetsState,
    Slot::RefreshToken,
    Slot::ChangedFacetId,
    Slot::DirtyFacetIds,
];

/// Observable state container for one facets panel.
#[derive(Debug, Default)]
pub struct FacetSelectionStore {
    state: FacetsPanelState,
    tokens: TokenSource,
    subscribers: Subscribers,
}

impl FacetSelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of every slot.
    pub fn state(&self) -> &FacetsPanelState {
        &self.state
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Registers a handler called after every mutation, in subscription order.
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&FacetsPanelState, &StoreChange) + 'static,
    {
        self.subscribers.subscribe(Box::new(handler))
    }

    /// Removes a handler. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn emit(&mut self, slots: Vec<Slot>) {
        let change = StoreChange {
            slots,
            refresh_token: self.state.facets_state_refresh_token,
        };
        self.subscribers.notify(&self.state, &change);
    }

    // =========================================================================
    // Configuration and loading slots
    // =========================================================================

    pub fn set_facets_config(&mut self, facets_config: FacetsConfig) {
        self.state.facets_config = Some(facets_config);
        self.emit(vec![Slot::FacetsConfig]);
    }

    pub fn set_facets(&mut self, facets: Vec<FacetDefinition>) {
        debug!(count = facets.len(), "facets loaded");
        self.state.facets = Some(facets);
        self.emit(vec![Slot::Facets]);
    }

    pub fn set_facet_options(&mut self, facet_options: FacetOptionsIndex) {
        debug!(facets = facet_options.len(), "facet options loaded");
        self.state.facet_options = Some(facet_options);
        self.emit(vec![Slot::FacetOptions]);
    }

    pub fn set_facet_options_loading_state(&mut self, loading_state: BTreeMap<String, String>) {
        self.state.facet_options_loading_state = loading_state;
        self.emit(vec![Slot::FacetOptionsLoadingState]);
    }

    pub fn set_queries_state(
        &mut self,
        filter_cel: String,
        facet_option_queries: BTreeMap<String, String>,
    ) {
        self.state.queries_state = QueriesState {
            filter_cel: Some(filter_cel),
            facet_option_queries: Some(facet_option_queries),
        };
        self.emit(vec![Slot::QueriesState]);
    }

    /// Rebuilds the query payloads from the loaded facets, options and selection.
    pub fn rebuild_queries(&mut self) {
        let no_options = FacetOptionsIndex::new();
        let facets = self.state.facets.as_deref().unwrap_or_default();
        let options = self.state.facet_options.as_ref().unwrap_or(&no_options);
        let queries = build_queries(facets, options, &self.state.facets_state);
        debug!(
            filter_cel = queries.filter_cel.as_deref().unwrap_or_default(),
            "queries rebuilt"
        );
        self.state.queries_state = queries;
        self.emit(vec![Slot::QueriesState]);
    }

    pub fn set_are_options_loading(&mut self, is_loading: bool) {
        self.state.are_options_loading = is_loading;
        self.emit(vec![Slot::AreOptionsLoading]);
    }

    pub fn set_are_options_re_loading(&mut self, is_loading: bool) {
        self.state.are_options_re_loading = is_loading;
        self.emit(vec![Slot::AreOptionsReLoading]);
    }

    pub fn set_is_facets_state_initialized_from_query_params(&mut self, initialized: bool) {
        self.state.is_facets_state_initialized_from_query_params = initialized;
        self.emit(vec![Slot::InitializedFromQueryParams]);
    }

    pub fn set_is_initial_state_handled(&mut self, handled: bool) {
        self.state.is_initial_state_handled = handled;
        self.emit(vec![Slot::InitialStateHandled]);
    }

    pub fn set_changed_facet_id(&mut self, facet_id: Option<String>) {
        self.state.changed_facet_id = facet_id;
        self.emit(vec![Slot::ChangedFacetId]);
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Merges `patch` into the selection, replacing whole facets.
    ///
    /// Issues a refresh token only when none exists, so repeated patches
    /// before the first user action trigger a single refresh.
    pub fn patch_facets_state(&mut self, patch: FacetsState) {
        let mut slots = vec![Slot::FacetsState];
        let patched = patch.len();
        self.state.facets_state.extend(patch);
        if self.state.facets_state_refresh_token.is_none() {
            self.state.facets_state_refresh_token = Some(self.tokens.issue());
            slots.push(Slot::RefreshToken);
        }
        debug!(
            facets = patched,
            token = ?self.state.facets_state_refresh_token,
            "facets state patched"
        );
        self.emit(slots);
    }

    /// Flips one option of a facet.
    pub fn toggle_facet_option(&mut self, facet_id: &str, option_value: &FacetValue) {
        let key = option_value.to_key();
        let selection = self
            .state
            .selection(facet_id)
            .toggled(&key, self.state.options_for(facet_id));
        self.commit_user_selection(facet_id, selection, "facet option toggled");
    }

    /// Makes `option_value` the only selected option of a facet.
    pub fn select_one_facet_option(&mut self, facet_id: &str, option_value: &FacetValue) {
        let selection = Selection::explicit([option_value.to_key()]);
        self.commit_user_selection(facet_id, selection, "single facet option selected");
    }

    /// Selects every loaded option of a facet.
    pub fn select_all_facet_options(&mut self, facet_id: &str) {
        let selection = Selection::from_options(self.state.options_for(facet_id));
        self.commit_user_selection(facet_id, selection, "all facet options selected");
    }

    /// Drops every selection and dirty mark and issues a fresh token.
    ///
    /// Configuration, loading flags and query payloads are kept.
    pub fn clear_filters(&mut self) {
        self.state.facets_state = FacetsState::new();
        self.state.is_initial_state_handled = false;
        self.state.dirty_facet_ids.clear();
        let token = self.tokens.issue();
        self.state.facets_state_refresh_token = Some(token);
        debug!(%token, "filters cleared");
        self.emit(vec![
            Slot::FacetsState,
            Slot::InitialStateHandled,
            Slot::RefreshToken,
            Slot::DirtyFacetIds,
        ]);
    }

    fn commit_user_selection(&mut self, facet_id: &str, selection: Selection, message: &str) {
        let token = self.tokens.issue();
        debug!(
            facet_id,
            %token,
            selected = selection.keys().map_or(0, BTreeSet::len),
            "{message}"
        );
        self.state
            .facets_state
            .insert(facet_id.to_string(), selection);
        self.state.facets_state_refresh_token = Some(token);
        self.state.changed_facet_id = Some(facet_id.to_string());
        self.state.dirty_facet_ids.insert(facet_id.to_string());
        self.emit(USER_SELECTION_SLOTS.to_vec());
    }
}
