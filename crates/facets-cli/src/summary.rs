use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use facets_cli::ReplayOutcome;
use facets_model::FacetDefinition;
use facets_store::{FacetsPanelState, Selection};

pub fn print_summary(outcome: &ReplayOutcome) {
    let state = outcome.store.state();
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Facet"),
        header_cell("Selection"),
        header_cell("Selected"),
        header_cell("Dirty"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for facet in state.facets().unwrap_or_default() {
        table.add_row(vec![
            facet_cell(state, facet),
            selection_cell(state.selection(&facet.id)),
            Cell::new(selected_count(state, facet)),
            dirty_cell(state.is_dirty(&facet.id)),
        ]);
    }
    println!("{table}");

    let token = state
        .refresh_token()
        .map_or_else(|| "-".to_string(), |token| token.to_string());
    println!("Refresh token: {token}");
    if let Some(facet_id) = state.changed_facet_id() {
        println!("Last changed: {facet_id}");
    }
    match state.queries_state().filter_cel.as_deref() {
        Some(filter) if !filter.is_empty() => println!("Filter: {filter}"),
        _ => println!("Filter: (none)"),
    }
    println!(
        "Notifications: {} ({} selection changes)",
        outcome.notifications, outcome.selection_changes
    );
}

/// Prints the full final state as pretty JSON.
pub fn print_json(outcome: &ReplayOutcome) -> serde_json::Result<()> {
    let json = serde_json::to_string_pretty(outcome.store.state())?;
    println!("{json}");
    Ok(())
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn facet_cell(state: &FacetsPanelState, facet: &FacetDefinition) -> Cell {
    let label = state
        .facets_config()
        .map_or(facet.name.as_str(), |config| config.label_for(facet));
    Cell::new(label)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn selection_cell(selection: &Selection) -> Cell {
    match selection {
        Selection::AllSelected => dim_cell("all"),
        Selection::Explicit(keys) if keys.is_empty() => Cell::new("none").fg(Color::Yellow),
        Selection::Explicit(keys) => {
            Cell::new(keys.iter().map(String::as_str).collect::<Vec<_>>().join(", "))
        }
    }
}

fn selected_count(state: &FacetsPanelState, facet: &FacetDefinition) -> String {
    let total = state.options_for(&facet.id).len();
    match state.selection(&facet.id).keys() {
        Some(keys) => format!("{}/{total}", keys.len()),
        None => format!("{total}/{total}"),
    }
}

fn dirty_cell(dirty: bool) -> Cell {
    if dirty {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}
