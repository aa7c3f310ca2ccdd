//! Client-side state for a facets filter panel.
//!
//! [`FacetSelectionStore`] owns every slot the panel reads: facet definitions,
//! loaded options, loading flags, query payloads and the per-facet
//! [`Selection`]. Mutations run synchronously and notify subscribers once per
//! call. Consumers watch the [`RefreshToken`] to learn that the selection
//! changed instead of diffing it.

pub mod queries;
pub mod selection;
pub mod state;
pub mod store;
pub mod subscriber;
pub mod token;

pub use queries::{QueriesState, build_queries};
pub use selection::{FacetsState, Selection};
pub use state::FacetsPanelState;
pub use store::FacetSelectionStore;
pub use subscriber::{Slot, StoreChange, SubscriptionId};
pub use token::RefreshToken;
