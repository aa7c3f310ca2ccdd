use anyhow::{Context, Result};
use comfy_table::Table;
use facets_cli::{ReplayOutcome, load_script, replay};
use facets_model::PanelFixture;
use tracing::{info, info_span};

use crate::cli::{InspectArgs, ReplayArgs};
use crate::summary::{apply_table_style, header_cell};

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let fixture = PanelFixture::from_path(&args.panel)
        .with_context(|| format!("load panel {}", args.panel.display()))?;

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Facet"),
        header_cell("Label"),
        header_cell("Field"),
        header_cell("Options"),
    ]);
    apply_table_style(&mut table);
    for facet in &fixture.facets {
        let loaded = fixture
            .options
            .get(&facet.id)
            .map(Vec::as_slice)
            .unwrap_or_default();
        let options = fixture
            .config
            .sort_for(&facet.id)
            .sorted(loaded)
            .into_iter()
            .map(|option| format!("{} ({})", option.display_name, option.matches_count))
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row(vec![
            facet.id.clone(),
            fixture.config.label_for(facet).to_string(),
            facet.property_path().to_string(),
            options,
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_replay(args: &ReplayArgs) -> Result<ReplayOutcome> {
    let span = info_span!("replay", panel = %args.panel.display());
    let _guard = span.enter();

    let fixture = PanelFixture::from_path(&args.panel)
        .with_context(|| format!("load panel {}", args.panel.display()))?;
    let actions = load_script(&args.script)
        .with_context(|| format!("load script {}", args.script.display()))?;
    info!(
        facets = fixture.facets.len(),
        actions = actions.len(),
        "inputs loaded"
    );

    Ok(replay(&fixture, &actions))
}
