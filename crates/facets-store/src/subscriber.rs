//! Change notification for store subscribers.

use std::fmt;

use tracing::trace;

use crate::state::FacetsPanelState;
use crate::token::RefreshToken;

/// A state slot that a mutation may change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    FacetsConfig,
    Facets,
    FacetOptions,
    FacetOptionsLoadingState,
    QueriesState,
    FacetsState,
    RefreshToken,
    DirtyFacetIds,
    ChangedFacetId,
    InitializedFromQueryParams,
    InitialStateHandled,
    AreOptionsLoading,
    AreOptionsReLoading,
}

/// What one store call changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreChange {
    /// Slots written by the call, in no particular order.
    pub slots: Vec<Slot>,
    /// Token after the call.
    pub refresh_token: Option<RefreshToken>,
}

impl StoreChange {
    pub fn touches(&self, slot: Slot) -> bool {
        self.slots.contains(&slot)
    }

    /// True when selection-dependent consumers should recompute.
    pub fn selection_changed(&self) -> bool {
        self.touches(Slot::RefreshToken)
    }
}

/// Handle returned by [`FacetSelectionStore::subscribe`](crate::FacetSelectionStore::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Callback invoked after every store mutation.
pub type ChangeHandler = Box<dyn FnMut(&FacetsPanelState, &StoreChange)>;

/// Ordered subscriber list.
#[derive(Default)]
pub(crate) struct Subscribers {
    entries: Vec<(SubscriptionId, ChangeHandler)>,
    next_id: u64,
}

impl Subscribers {
    pub(crate) fn subscribe(&mut self, handler: ChangeHandler) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.entries.push((id, handler));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Calls every handler in subscription order.
    pub(crate) fn notify(&mut self, state: &FacetsPanelState, change: &StoreChange) {
        trace!(
            subscribers = self.entries.len(),
            slots = ?change.slots,
            "notifying subscribers"
        );
        for (_, handler) in &mut self.entries {
            handler(state, change);
        }
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
