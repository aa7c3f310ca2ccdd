//! Filter expressions derived from the selection.
//!
//! The panel sends two kinds of query to the backend: one CEL filter for the
//! result list, and one per facet for that facet's option counts. The
//! per-facet query leaves out the facet's own clause, otherwise deselecting
//! an option would hide it from its own list.

use std::collections::BTreeMap;

use facets_model::{FacetDefinition, FacetOption, FacetOptionsIndex, FacetValue};
use serde::Serialize;

use crate::selection::{FacetsState, Selection};

/// Query payloads last written by the query builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueriesState {
    pub filter_cel: Option<String>,
    pub facet_option_queries: Option<BTreeMap<String, String>>,
}

/// Builds the result filter and the per-facet option queries.
///
/// Facets are visited in definition order. Facets still in their implicit
/// all-selected state add no clause.
pub fn build_queries(
    facets: &[FacetDefinition],
    options: &FacetOptionsIndex,
    state: &FacetsState,
) -> QueriesState {
    let clauses: Vec<(&str, String)> = facets
        .iter()
        .filter_map(|facet| {
            let Selection::Explicit(keys) = state.get(&facet.id)? else {
                return None;
            };
            let loaded = options
                .get(&facet.id)
                .map(Vec::as_slice)
                .unwrap_or_default();
            Some((facet.id.as_str(), facet_clause(facet, keys, loaded)))
        })
        .collect();

    let filter_cel = join_clauses(clauses.iter().map(|(_, clause)| clause.as_str()));
    let facet_option_queries = facets
        .iter()
        .map(|facet| {
            let others = clauses
                .iter()
                .filter(|(facet_id, _)| *facet_id != facet.id)
                .map(|(_, clause)| clause.as_str());
            (facet.id.clone(), join_clauses(others))
        })
        .collect();

    QueriesState {
        filter_cel: Some(filter_cel),
        facet_option_queries: Some(facet_option_queries),
    }
}

fn facet_clause<'a>(
    facet: &FacetDefinition,
    keys: impl IntoIterator<Item = &'a String>,
    loaded: &[FacetOption],
) -> String {
    let literals: Vec<String> = keys
        .into_iter()
        .map(|key| {
            loaded
                .iter()
                .find(|option| option.key() == *key)
                .map_or_else(|| quote(key), |option| cel_literal(&option.value))
        })
        .collect();
    if literals.is_empty() {
        return "false".to_string();
    }
    format!("{} in [{}]", facet.property_path(), literals.join(", "))
}

fn join_clauses<'a>(clauses: impl Iterator<Item = &'a str>) -> String {
    clauses.collect::<Vec<_>>().join(" && ")
}

fn cel_literal(value: &FacetValue) -> String {
    match value {
        FacetValue::Null => "null".to_string(),
        FacetValue::Bool(value) => value.to_string(),
        FacetValue::Integer(value) => value.to_string(),
        FacetValue::Float(value) if value.is_finite() => value.to_string(),
        FacetValue::Float(_) => quote(&value.to_key()),
        FacetValue::String(value) => quote(value),
    }
}

fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}
