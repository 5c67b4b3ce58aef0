use crate::output::Output;
use catalog_config::Config;
use catalog_sources::source_from_config;
use color_eyre::Result;
use comfy_table::{Attribute, Cell, Table};
use serde_json::json;

pub async fn run_genres(config: Config, output: &Output) -> Result<()> {
    let source = source_from_config(&config).map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let genres = source
        .fetch_genres()
        .await
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load genres: {}", e))?;

    if output.is_human() {
        if genres.is_empty() {
            output.info("No genres in the database.");
            return Ok(());
        }
        let mut table = Table::new();
        table.set_header(vec![
            Cell::new("Genre").add_attribute(Attribute::Bold),
            Cell::new("Id").add_attribute(Attribute::Bold),
        ]);
        for genre in &genres {
            table.add_row(vec![Cell::new(&genre.name), Cell::new(&genre.id)]);
        }
        table.load_preset(comfy_table::presets::UTF8_FULL);
        table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
        output.block(table.to_string());
    } else {
        output.json(&json!({ "genres": genres, "count": genres.len() }));
    }

    Ok(())
}
