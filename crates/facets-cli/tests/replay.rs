//! Integration tests for replaying scripts against the bundled fixture.

use std::path::PathBuf;

use facets_cli::{ScriptAction, load_script, parse_script, replay};
use facets_model::PanelFixture;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

fn panel() -> PanelFixture {
    PanelFixture::from_path(&fixture_path("panel.json")).expect("load panel fixture")
}

#[test]
fn bundled_script_replays() {
    let actions = load_script(&fixture_path("script.json")).expect("load script");
    let outcome = replay(&panel(), &actions);
    let state = outcome.store.state();

    insta::assert_json_snapshot!(state.facets_state(), @r#"
    {
      "owner": [
        "alice",
        "bob"
      ],
      "severity": [
        "3"
      ],
      "status": [
        "pending"
      ]
    }
    "#);
    assert_eq!(state.refresh_token().map(|token| token.version()), Some(4));
    assert_eq!(state.changed_facet_id(), Some("owner"));
    assert_eq!(state.dirty_facet_ids().len(), 3);
    assert_eq!(
        state.queries_state().filter_cel.as_deref(),
        Some("alert.status in ['pending'] && alert.severity in [3] && owner in ['alice', 'bob']")
    );
    let per_facet = state
        .queries_state()
        .facet_option_queries
        .as_ref()
        .expect("per-facet queries");
    assert_eq!(
        per_facet["status"],
        "alert.severity in [3] && owner in ['alice', 'bob']"
    );
    assert!(!state.are_options_loading());
    assert_eq!(outcome.notifications, 11);
    assert_eq!(outcome.selection_changes, 4);
}

#[test]
fn clear_at_the_end_leaves_no_filter() {
    let actions = parse_script(
        r#"[
            {"action": "select_all", "facet": "status"},
            {"action": "toggle", "facet": "severity", "value": 1},
            {"action": "clear"}
        ]"#,
    )
    .expect("parse script");
    let outcome = replay(&panel(), &actions);
    let state = outcome.store.state();

    assert!(state.facets_state().is_empty());
    assert!(state.dirty_facet_ids().is_empty());
    assert_eq!(state.queries_state().filter_cel.as_deref(), Some(""));
    assert_eq!(outcome.selection_changes, 3);
}

#[test]
fn first_toggle_uses_loaded_options() {
    let actions = vec![ScriptAction::Toggle {
        facet: "severity".to_string(),
        value: 2_i64.into(),
    }];
    let outcome = replay(&panel(), &actions);
    let selection = outcome.store.state().selection("severity");

    let keys: Vec<&str> = selection
        .keys()
        .expect("explicit selection")
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["1", "3", "4"]);
}

#[test]
fn state_serializes_to_json() {
    let outcome = replay(&panel(), &[]);
    let json = serde_json::to_value(outcome.store.state()).expect("serialize state");

    assert_eq!(json["facets_state"], serde_json::json!({}));
    assert_eq!(json["facets_state_refresh_token"], serde_json::Value::Null);
    assert_eq!(json["facets"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["queries_state"]["filter_cel"], "");
}
