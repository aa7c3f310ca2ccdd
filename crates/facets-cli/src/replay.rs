//! Drives a store through a panel fixture and a script.

use std::cell::Cell;
use std::rc::Rc;

use facets_model::PanelFixture;
use facets_store::FacetSelectionStore;
use tracing::{debug_span, info};

use crate::script::ScriptAction;

/// Store after a replay plus what its subscribers observed.
#[derive(Debug)]
pub struct ReplayOutcome {
    pub store: FacetSelectionStore,
    pub notifications: usize,
    pub selection_changes: usize,
}

/// Loads `fixture` the way the fetch layer would, applies `actions` in order
/// and rebuilds the query payloads.
pub fn replay(fixture: &PanelFixture, actions: &[ScriptAction]) -> ReplayOutcome {
    let mut store = FacetSelectionStore::new();
    let notifications = Rc::new(Cell::new(0usize));
    let selection_changes = Rc::new(Cell::new(0usize));
    {
        let notifications = Rc::clone(&notifications);
        let selection_changes = Rc::clone(&selection_changes);
        store.subscribe(move |_, change| {
            notifications.set(notifications.get() + 1);
            if change.selection_changed() {
                selection_changes.set(selection_changes.get() + 1);
            }
        });
    }

    store.set_are_options_loading(true);
    store.set_facets_config(fixture.config.clone());
    store.set_facets(fixture.facets.clone());
    store.set_facet_options(fixture.options.clone());
    store.set_are_options_loading(false);

    for (step, action) in actions.iter().enumerate() {
        let _span = debug_span!("step", step, action = %action.describe()).entered();
        action.apply(&mut store);
    }
    store.rebuild_queries();

    info!(
        actions = actions.len(),
        token = ?store.state().refresh_token(),
        "replay finished"
    );
    ReplayOutcome {
        store,
        notifications: notifications.get(),
        selection_changes: selection_changes.get(),
    }
}
