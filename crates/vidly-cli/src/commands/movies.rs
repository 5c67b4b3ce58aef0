use super::load_ui::load_view;
use super::render;
use crate::output::Output;
use catalog_config::Config;
use catalog_core::{CatalogView, PageInfo};
use catalog_sources::source_from_config;
use color_eyre::Result;

#[derive(Debug, Clone, Default)]
pub struct MoviesRequest {
    pub genre: Option<String>,
    pub search: Option<String>,
    pub page: usize,
    pub like: Vec<String>,
}

/// Applies the request's interactions in the order a user would make them:
/// genre first (which clears the search), then search, then page.
pub fn apply_request(view: &mut CatalogView, request: &MoviesRequest) -> Result<()> {
    if let Some(genre) = &request.genre {
        view.select_genre_key(genre)
            .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    }
    if let Some(search) = &request.search {
        view.set_search_query(search.clone());
    }
    view.go_to_page(request.page);

    for movie_id in &request.like {
        view.toggle_like(movie_id).map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    }
    Ok(())
}

/// Warning for a requested page outside `1..=total_pages`, if there is one to give.
pub fn page_range_warning(info: &PageInfo) -> Option<String> {
    if info.total_items == 0 || info.in_range() {
        return None;
    }
    if info.page == 0 {
        Some(format!("Pages start at 1; there are {} page(s)", info.total_pages))
    } else {
        Some(format!("Page {} is past the last page ({})", info.page, info.total_pages))
    }
}

pub async fn run_movies(config: Config, request: MoviesRequest, output: &Output) -> Result<()> {
    tracing::debug!(?request, "Movies command started");

    let source = source_from_config(&config).map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    let mut view = load_view(source, config.catalog.page_size, output).await?;

    if let Some(reason) = view.movies().failure() {
        return Err(color_eyre::eyre::eyre!("Failed to load movies: {}", reason));
    }
    if let Some(reason) = view.genres().failure() {
        output.warn(format!("Failed to load genres: {}", reason));
    }

    apply_request(&mut view, &request)?;

    if output.is_human() {
        let info = view.page_info();
        output.block(render::filter_summary(&view));
        output.info(view.count_line());
        if view.visible_rows().is_empty() {
            match page_range_warning(&info) {
                Some(warning) => output.warn(warning),
                None => output.info("No movies match."),
            }
        } else {
            output.block(render::movies_table(&view).to_string());
        }
        let links = render::pagination_line(&info);
        if !links.is_empty() {
            output.block(format!("Pages: {}", links));
        }
    } else {
        output.json(&render::view_json(&view));
    }

    Ok(())
}
