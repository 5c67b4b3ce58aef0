use super::load_ui::{is_interactive, load_view};
use super::prompts;
use super::render;
use crate::output::Output;
use catalog_config::Config;
use catalog_core::{CatalogView, PageInfo};
use catalog_models::GenreFilter;
use catalog_sources::source_from_config;
use color_eyre::Result;
use owo_colors::OwoColorize;
use std::fmt;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseAction {
    PickGenre,
    Search,
    NextPage,
    PreviousPage,
    FirstPage,
    GoToPage,
    ToggleLike,
    Quit,
}

impl fmt::Display for BrowseAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BrowseAction::PickGenre => "Pick a genre",
            BrowseAction::Search => "Search titles",
            BrowseAction::NextPage => "Next page",
            BrowseAction::PreviousPage => "Previous page",
            BrowseAction::FirstPage => "First page",
            BrowseAction::GoToPage => "Go to page...",
            BrowseAction::ToggleLike => "Like / unlike a movie",
            BrowseAction::Quit => "Quit",
        };
        write!(f, "{}", label)
    }
}

/// Actions that make sense for the current state of the view.
pub fn available_actions(view: &CatalogView) -> Vec<BrowseAction> {
    let info = view.page_info();
    let mut actions = vec![BrowseAction::PickGenre, BrowseAction::Search];
    if info.page < info.total_pages {
        actions.push(BrowseAction::NextPage);
    }
    if info.page > 1 {
        actions.push(BrowseAction::PreviousPage);
    }
    if info.page > 2 {
        actions.push(BrowseAction::FirstPage);
    }
    if info.total_pages > 1 {
        actions.push(BrowseAction::GoToPage);
    }
    if !view.visible_rows().is_empty() {
        actions.push(BrowseAction::ToggleLike);
    }
    actions.push(BrowseAction::Quit);
    actions
}

/// Target of "Previous page". From past the end it lands on the last page.
pub fn previous_page(info: &PageInfo) -> usize {
    if info.page > info.total_pages {
        info.total_pages.max(1)
    } else {
        info.page.saturating_sub(1).max(1)
    }
}

fn render_screen(view: &CatalogView, output: &Output) {
    if let Some(reason) = view.movies().failure() {
        output.error(format!("Failed to load movies: {}", reason));
    }
    if let Some(reason) = view.genres().failure() {
        output.warn(format!("Failed to load genres: {}", reason));
    }

    output.block(format!("\n{}", "Genres".bright_cyan().bold()));
    output.block(render::genre_list(&view.genre_entries()));
    output.block("");
    output.block(render::filter_summary(view).dimmed().to_string());
    output.info(view.count_line());

    if view.visible_rows().is_empty() {
        output.info("No movies on this page.");
    } else {
        output.block(render::movies_table(view).to_string());
    }

    let links = render::pagination_line(&view.page_info());
    if !links.is_empty() {
        output.block(format!("Pages: {}", links));
    }
}

fn pick_genre(view: &mut CatalogView) -> Result<()> {
    let entries = view.genre_entries();
    let current = entries.iter().position(|e| e.selected).unwrap_or(0);
    let Some(index) = prompts::prompt_select("Genre", &entries.iter().map(|e| e.label.clone()).collect::<Vec<_>>(), current)? else {
        return Ok(());
    };

    match &entries[index].filter {
        GenreFilter::All => view.select_genre(GenreFilter::All),
        GenreFilter::Genre(name) => {
            let genre = view.genres().items().iter().find(|g| &g.name == name).cloned();
            match genre {
                Some(genre) => view.toggle_genre(&genre),
                None => view.select_genre(entries[index].filter.clone()),
            }
        }
    }
    Ok(())
}

fn toggle_like(view: &mut CatalogView, output: &Output) -> Result<()> {
    let rows: Vec<(String, String)> = view
        .visible_rows()
        .iter()
        .map(|row| {
            let heart = if row.liked { "♥" } else { "♡" };
            (row.movie.id.clone(), format!("{} {}", heart, row.movie.title))
        })
        .collect();
    let labels: Vec<&str> = rows.iter().map(|(_, label)| label.as_str()).collect();

    if let Some(index) = prompts::prompt_select("Movie", &labels, 0)? {
        let liked = view
            .toggle_like(&rows[index].0)
            .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
        let title = rows[index].1.trim_start_matches(['♥', '♡', ' ']);
        if liked {
            output.success(format!("Liked {}", title));
        } else {
            output.info(format!("Unliked {}", title));
        }
    }
    Ok(())
}

pub async fn run_browse(config: Config, output: &Output) -> Result<()> {
    if !is_interactive() {
        return Err(color_eyre::eyre::eyre!(
            "browse needs an interactive terminal; use 'vidly movies' for scripted output"
        ));
    }

    let source = source_from_config(&config).map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    let mut view = load_view(source, config.catalog.page_size, output).await?;
    info!(operation = "browse_start", page_size = view.page_size(), "Browse session started");

    loop {
        render_screen(&view, output);

        let actions = available_actions(&view);
        let Some(index) = prompts::prompt_select("What next?", &actions, 0)? else {
            break;
        };

        match actions[index] {
            BrowseAction::PickGenre => pick_genre(&mut view)?,
            BrowseAction::Search => {
                let query = prompts::prompt_string("Search", Some(view.search_query()))?;
                view.set_search_query(query.trim().to_string());
            }
            BrowseAction::NextPage => view.go_to_page(view.current_page() + 1),
            BrowseAction::PreviousPage => view.go_to_page(previous_page(&view.page_info())),
            BrowseAction::FirstPage => view.go_to_page(1),
            BrowseAction::GoToPage => {
                let page = prompts::prompt_page("Page", view.current_page())?;
                view.go_to_page(page);
            }
            BrowseAction::ToggleLike => toggle_like(&mut view, output)?,
            BrowseAction::Quit => break,
        }
    }

    info!(operation = "browse_end", "Browse session ended");
    Ok(())
}
