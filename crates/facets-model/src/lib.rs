//! Data model for the facets filter panel.
//!
//! Everything here is plain data: facet definitions, their options, the
//! per-facet display configuration and the fixture format used to load a
//! whole panel at once. Selection logic lives in `facets-store`.

pub mod error;
pub mod facet;
pub mod fixture;
pub mod value;

pub use error::{FacetsError, Result};
pub use facet::{
    FacetConfig, FacetDefinition, FacetOption, FacetOptionsIndex, FacetsConfig, OptionSort,
};
pub use fixture::PanelFixture;
pub use value::FacetValue;
