//! Selection behaviour of the facets store.

use std::collections::BTreeSet;

use facets_model::{FacetOption, FacetOptionsIndex, FacetValue};
use facets_store::{FacetSelectionStore, FacetsState, Selection};

fn value(key: &str) -> FacetValue {
    FacetValue::from(key)
}

fn keys(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

fn status_store() -> FacetSelectionStore {
    let mut options = FacetOptionsIndex::new();
    options.insert(
        "status".to_string(),
        vec![
            FacetOption::new("Open", "open"),
            FacetOption::new("Closed", "closed"),
            FacetOption::new("Pending", "pending"),
        ],
    );
    let mut store = FacetSelectionStore::new();
    store.set_facet_options(options);
    store
}

fn selected(store: &FacetSelectionStore, facet_id: &str) -> BTreeSet<String> {
    store
        .state()
        .selection(facet_id)
        .keys()
        .cloned()
        .expect("explicit selection")
}

#[test]
fn status_walkthrough() {
    let mut store = status_store();

    store.toggle_facet_option("status", &value("closed"));
    assert_eq!(selected(&store, "status"), keys(&["open", "pending"]));

    store.toggle_facet_option("status", &value("open"));
    assert_eq!(selected(&store, "status"), keys(&["pending"]));

    store.select_one_facet_option("status", &value("closed"));
    assert_eq!(selected(&store, "status"), keys(&["closed"]));

    store.select_all_facet_options("status");
    assert_eq!(selected(&store, "status"), keys(&["open", "closed", "pending"]));
}

#[test]
fn untouched_facet_reads_as_all_selected() {
    let store = status_store();
    assert_eq!(store.state().selection("status"), &Selection::AllSelected);
    assert!(store.state().facets_state().is_empty());
}

#[test]
fn toggle_without_loaded_options_is_empty() {
    let mut store = FacetSelectionStore::new();
    store.toggle_facet_option("x", &value("a"));
    assert_eq!(selected(&store, "x"), BTreeSet::new());
    assert!(store.state().is_dirty("x"));
}

#[test]
fn select_all_without_loaded_options_is_empty() {
    let mut store = status_store();
    store.select_all_facet_options("owner");
    assert_eq!(selected(&store, "owner"), BTreeSet::new());
}

#[test]
fn toggling_last_option_off_and_on_restores_set() {
    let mut store = status_store();
    store.select_one_facet_option("status", &value("open"));

    store.toggle_facet_option("status", &value("open"));
    assert!(selected(&store, "status").is_empty());

    store.toggle_facet_option("status", &value("open"));
    assert_eq!(selected(&store, "status"), keys(&["open"]));
}

#[test]
fn integer_and_string_values_share_a_key() {
    let mut options = FacetOptionsIndex::new();
    options.insert(
        "severity".to_string(),
        vec![FacetOption::new("Low", 1_i64), FacetOption::new("High", 3_i64)],
    );
    let mut store = FacetSelectionStore::new();
    store.set_facet_options(options);

    store.select_one_facet_option("severity", &FacetValue::Integer(3));
    store.toggle_facet_option("severity", &value("3"));
    assert!(selected(&store, "severity").is_empty());
}

#[test]
fn dirty_ids_are_a_set() {
    let mut store = status_store();
    store.toggle_facet_option("status", &value("open"));
    store.toggle_facet_option("owner", &value("me"));
    store.toggle_facet_option("status", &value("open"));

    assert_eq!(store.state().dirty_facet_ids(), &keys(&["owner", "status"]));
    assert_eq!(store.state().changed_facet_id(), Some("status"));
}

#[test]
fn every_user_action_issues_a_newer_token() {
    let mut store = status_store();
    let mut last = store.state().refresh_token();
    assert!(last.is_none());

    let actions: [fn(&mut FacetSelectionStore); 4] = [
        |store| store.toggle_facet_option("status", &FacetValue::from("open")),
        |store| store.select_one_facet_option("status", &FacetValue::from("open")),
        |store| store.select_all_facet_options("status"),
        FacetSelectionStore::clear_filters,
    ];
    for action in actions {
        action(&mut store);
        let token = store.state().refresh_token();
        assert!(token > last, "{token:?} should be newer than {last:?}");
        last = token;
    }
}

#[test]
fn patch_issues_one_token_until_cleared() {
    let mut store = status_store();

    let mut patch = FacetsState::new();
    patch.insert("status".to_string(), Selection::explicit(["open"]));
    store.patch_facets_state(patch);
    let first = store.state().refresh_token();
    assert!(first.is_some());

    let mut patch = FacetsState::new();
    patch.insert("owner".to_string(), Selection::explicit(["me"]));
    store.patch_facets_state(patch);
    assert_eq!(store.state().refresh_token(), first);

    assert_eq!(selected(&store, "status"), keys(&["open"]));
    assert_eq!(selected(&store, "owner"), keys(&["me"]));
    assert!(store.state().dirty_facet_ids().is_empty());
    assert!(store.state().changed_facet_id().is_none());
}

#[test]
fn patch_replaces_whole_facets_only() {
    let mut store = status_store();
    store.select_one_facet_option("status", &value("open"));
    store.select_one_facet_option("owner", &value("me"));

    let mut patch = FacetsState::new();
    patch.insert("status".to_string(), Selection::AllSelected);
    store.patch_facets_state(patch);

    assert!(store.state().selection("status").is_all());
    assert_eq!(selected(&store, "owner"), keys(&["me"]));
}

#[test]
fn clear_filters_resets_selection_only() {
    let mut store = status_store();
    store.set_are_options_loading(true);
    store.set_is_initial_state_handled(true);
    store.set_queries_state("status in ['open']".to_string(), Default::default());
    store.toggle_facet_option("status", &value("open"));
    let before = store.state().refresh_token();

    store.clear_filters();

    let state = store.state();
    assert!(state.facets_state().is_empty());
    assert!(state.dirty_facet_ids().is_empty());
    assert!(!state.is_initial_state_handled());
    assert!(state.refresh_token() > before);
    assert!(state.are_options_loading());
    assert_eq!(
        state.queries_state().filter_cel.as_deref(),
        Some("status in ['open']")
    );
    assert_eq!(state.options_for("status").len(), 3);
}
