use catalog_core::{CatalogView, GenreEntry, PageInfo};
use catalog_models::LoadState;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};
use serde_json::{json, Value};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}

/// The current page as a Title / Genre / Stock / Rate table.
pub fn movies_table(view: &CatalogView) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("").add_attribute(Attribute::Bold),
        Cell::new("Title").add_attribute(Attribute::Bold),
        Cell::new("Genre").add_attribute(Attribute::Bold),
        Cell::new("Stock").add_attribute(Attribute::Bold),
        Cell::new("Rate").add_attribute(Attribute::Bold),
        Cell::new("Id").add_attribute(Attribute::Bold),
    ]);

    for row in view.visible_rows() {
        let heart = if row.liked {
            Cell::new("♥").fg(Color::Red)
        } else {
            Cell::new("♡")
        };
        table.add_row(vec![
            heart,
            Cell::new(&row.movie.title),
            Cell::new(row.movie.genre_name()),
            Cell::new(row.movie.number_in_stock).set_alignment(CellAlignment::Right),
            Cell::new(format_rate(row.movie.daily_rental_rate)).set_alignment(CellAlignment::Right),
            Cell::new(&row.movie.id).fg(Color::DarkGrey),
        ]);
    }

    table
}

pub fn format_rate(rate: f64) -> String {
    if rate.fract() == 0.0 {
        format!("{:.0}", rate)
    } else {
        format!("{:.2}", rate)
    }
}

/// `1 [2] 3` style page links, active page bracketed. Empty when there is nothing to page.
pub fn pagination_line(info: &PageInfo) -> String {
    info.page_links()
        .into_iter()
        .map(|(n, active)| if active { format!("[{}]", n) } else { n.to_string() })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn genre_list(entries: &[GenreEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{} {}", if e.selected { "●" } else { "○" }, e.label))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Human summary of the current filters, e.g. `Drama · search "tit" · page 2 of 3`.
pub fn filter_summary(view: &CatalogView) -> String {
    let info = view.page_info();
    let mut parts = vec![view.genre_filter().to_string()];
    if !view.search_query().is_empty() {
        parts.push(format!("search \"{}\"", view.search_query()));
    }
    parts.push(format!("page {} of {}", info.page, info.total_pages.max(1)));
    parts.join(" · ")
}

fn load_state_json<T>(state: &LoadState<Vec<T>>) -> Value {
    match state {
        LoadState::Loading => json!({ "state": "loading" }),
        LoadState::Loaded(items) => json!({ "state": "loaded", "count": items.len() }),
        LoadState::Failed(reason) => json!({ "state": "failed", "reason": reason }),
    }
}

/// Machine-readable rendering of everything the table view shows.
pub fn view_json(view: &CatalogView) -> Value {
    let info = view.page_info();
    json!({
        "movies_state": load_state_json(view.movies()),
        "genres_state": load_state_json(view.genres()),
        "genre": view.genre_filter(),
        "search": view.search_query(),
        "total": info.total_items,
        "page": info,
        "rows": view.visible_rows(),
    })
}
