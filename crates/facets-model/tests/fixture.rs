//! Tests for panel fixture loading.

use facets_model::{FacetValue, FacetsError, OptionSort, PanelFixture};

const PANEL: &str = r#"{
    "config": {"severity": {"sort": "matches_count"}},
    "facets": [
        {"id": "status", "name": "Status", "property_path": "alert.status"},
        {"id": "severity", "name": "Severity", "is_static": true}
    ],
    "options": {
        "status": [
            {"display_name": "Open", "value": "open", "matches_count": 4},
            {"display_name": "Closed", "value": "closed"}
        ],
        "severity": [
            {"display_name": "Low", "value": 1},
            {"display_name": "High", "value": 3, "matches_count": 12}
        ]
    }
}"#;

#[test]
fn parses_full_panel() {
    let fixture = PanelFixture::from_json_str(PANEL).expect("parse panel");

    assert_eq!(fixture.facets.len(), 2);
    let status = fixture.facet("status").expect("status facet");
    assert_eq!(status.property_path(), "alert.status");
    assert!(fixture.facet("severity").expect("severity facet").is_static);

    let severity = &fixture.options["severity"];
    assert_eq!(severity[1].value, FacetValue::Integer(3));
    assert_eq!(severity[1].key(), "3");
    assert_eq!(fixture.options["status"][1].matches_count, 0);
    assert_eq!(fixture.config.sort_for("severity"), OptionSort::MatchesCount);
}

#[test]
fn empty_document_is_an_empty_panel() {
    let fixture = PanelFixture::from_json_str("{}").expect("parse empty panel");
    assert!(fixture.facets.is_empty());
    assert!(fixture.options.is_empty());
}

#[test]
fn rejects_duplicate_facets() {
    let content = r#"{"facets": [{"id": "a", "name": "A"}, {"id": "a", "name": "Again"}]}"#;
    let error = PanelFixture::from_json_str(content).expect_err("duplicate facet");
    assert!(matches!(error, FacetsError::DuplicateFacet(id) if id == "a"));
}

#[test]
fn rejects_options_for_unknown_facet() {
    let content = r#"{
        "facets": [{"id": "a", "name": "A"}],
        "options": {"b": [{"display_name": "x", "value": "x"}]}
    }"#;
    let error = PanelFixture::from_json_str(content).expect_err("unknown facet");
    assert!(matches!(error, FacetsError::UnknownFacet(id) if id == "b"));
}

#[test]
fn reports_malformed_json() {
    let error = PanelFixture::from_json_str("{not json").expect_err("malformed");
    assert!(matches!(error, FacetsError::Json(_)));
}

#[test]
fn missing_file_is_io_error() {
    let path = std::env::temp_dir().join(format!("facets-missing-{}.json", std::process::id()));
    let error = PanelFixture::from_path(&path).expect_err("missing file");
    assert!(matches!(error, FacetsError::Io(_)));
}
