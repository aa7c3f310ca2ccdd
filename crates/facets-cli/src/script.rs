//! Scripted panel interactions.
//!
//! A script is a JSON array of actions, each tagged by `"action"`:
//!
//! ```json
//! [
//!   { "action": "toggle", "facet": "status", "value": "closed" },
//!   { "action": "select_one", "facet": "severity", "value": 3 },
//!   { "action": "select_all", "facet": "status" },
//!   { "action": "patch", "state": { "owner": ["alice"], "status": "all" } },
//!   { "action": "clear" }
//! ]
//! ```

use std::path::Path;

use facets_model::{FacetValue, Result};
use facets_store::{FacetSelectionStore, FacetsState};
use serde::Deserialize;

/// One user or URL-sync interaction with the panel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptAction {
    Toggle { facet: String, value: FacetValue },
    SelectOne { facet: String, value: FacetValue },
    SelectAll { facet: String },
    /// Programmatic restore, as done from URL parameters.
    Patch { state: FacetsState },
    Clear,
}

impl ScriptAction {
    pub fn apply(&self, store: &mut FacetSelectionStore) {
        match self {
            Self::Toggle { facet, value } => store.toggle_facet_option(facet, value),
            Self::SelectOne { facet, value } => store.select_one_facet_option(facet, value),
            Self::SelectAll { facet } => store.select_all_facet_options(facet),
            Self::Patch { state } => store.patch_facets_state(state.clone()),
            Self::Clear => store.clear_filters(),
        }
    }

    /// Short label for logs and summaries.
    pub fn describe(&self) -> String {
        match self {
            Self::Toggle { facet, value } => format!("toggle {facet}={value}"),
            Self::SelectOne { facet, value } => format!("select one {facet}={value}"),
            Self::SelectAll { facet } => format!("select all {facet}"),
            Self::Patch { state } => format!("patch {} facet(s)", state.len()),
            Self::Clear => "clear".to_string(),
        }
    }
}

pub fn parse_script(content: &str) -> Result<Vec<ScriptAction>> {
    Ok(serde_json::from_str(content)?)
}

pub fn load_script(path: &Path) -> Result<Vec<ScriptAction>> {
    let content = std::fs::read_to_string(path)?;
    parse_script(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use facets_store::Selection;

    #[test]
    fn parses_every_action() {
        let actions = parse_script(
            r#"[
                {"action": "toggle", "facet": "status", "value": "open"},
                {"action": "select_one", "facet": "severity", "value": 2},
                {"action": "select_all", "facet": "status"},
                {"action": "patch", "state": {"owner": ["bob"], "status": "all"}},
                {"action": "clear"}
            ]"#,
        )
        .expect("parse script");

        assert_eq!(
            actions[0],
            ScriptAction::Toggle {
                facet: "status".to_string(),
                value: FacetValue::from("open"),
            }
        );
        assert_eq!(
            actions[1],
            ScriptAction::SelectOne {
                facet: "severity".to_string(),
                value: FacetValue::Integer(2),
            }
        );
        let ScriptAction::Patch { state } = &actions[3] else {
            panic!("expected patch, got {:?}", actions[3]);
        };
        assert_eq!(state["owner"], Selection::explicit(["bob"]));
        assert!(state["status"].is_all());
        assert_eq!(actions[4], ScriptAction::Clear);
    }

    #[test]
    fn rejects_unknown_action() {
        assert!(parse_script(r#"[{"action": "undo"}]"#).is_err());
    }

    #[test]
    fn describes_actions() {
        let action = ScriptAction::SelectOne {
            facet: "severity".to_string(),
            value: FacetValue::Integer(3),
        };
        assert_eq!(action.describe(), "select one severity=3");
        assert_eq!(ScriptAction::Clear.describe(), "clear");
    }
}
