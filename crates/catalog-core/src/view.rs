use catalog_models::{Genre, GenreFilter, LoadState, Movie};
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, warn};

use crate::filter::{apply_filters, resolve_genre_key};
use crate::loader::LoadEvent;
use crate::pagination::{page_slice, PageInfo};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewError {
    #[error("unknown genre '{0}'")]
    UnknownGenre(String),
    #[error("unknown movie id '{0}'")]
    UnknownMovie(String),
}

/// One rendered table row.
#[derive(Debug, Clone, Serialize)]
pub struct Row<'a> {
    #[serde(flatten)]
    pub movie: &'a Movie,
    pub liked: bool,
}

/// One entry of the genre sidebar. The first entry is always "All Genres".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreEntry {
    pub label: String,
    pub filter: GenreFilter,
    pub selected: bool,
}

/// State of the movie catalog page.
///
/// Holds the two fetched collections and the user's filter state. Every
/// derived value (filtered movies, visible rows, page links) is recomputed
/// from these on demand, so the visible rows are always a subset of the
/// fetched movies.
#[derive(Debug, Clone)]
pub struct CatalogView {
    movies: LoadState<Vec<Movie>>,
    genres: LoadState<Vec<Genre>>,
    genre_filter: GenreFilter,
    search_query: String,
    current_page: usize,
    page_size: usize,
    liked: HashSet<String>,
}

impl CatalogView {
    /// A view with both collections loading and default filters.
    ///
    /// A zero page size is bumped to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            movies: LoadState::Loading,
            genres: LoadState::Loading,
            genre_filter: GenreFilter::All,
            search_query: String::new(),
            current_page: 1,
            page_size: page_size.max(1),
            liked: HashSet::new(),
        }
    }

    pub fn movies(&self) -> &LoadState<Vec<Movie>> {
        &self.movies
    }

    pub fn genres(&self) -> &LoadState<Vec<Genre>> {
        &self.genres
    }

    pub fn genre_filter(&self) -> &GenreFilter {
        &self.genre_filter
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Either collection still waiting on its read.
    pub fn is_loading(&self) -> bool {
        self.movies.is_loading() || self.genres.is_loading()
    }

    pub fn set_movies(&mut self, movies: LoadState<Vec<Movie>>) {
        if let Some(reason) = movies.failure() {
            warn!(operation = "load_movies", error = reason, "Movie collection failed to load");
        }
        self.movies = movies;
    }

    pub fn set_genres(&mut self, genres: LoadState<Vec<Genre>>) {
        if let Some(reason) = genres.failure() {
            warn!(operation = "load_genres", error = reason, "Genre collection failed to load");
        }
        self.genres = genres;
    }

    /// Applies a completed read. Each event touches only its own collection,
    /// so completions may arrive in either order.
    pub fn apply(&mut self, event: LoadEvent) {
        match event {
            LoadEvent::Movies(state) => self.set_movies(state),
            LoadEvent::Genres(state) => self.set_genres(state),
        }
    }

    /// Restricts to one genre (or none), back to page 1 with the search cleared.
    pub fn select_genre(&mut self, filter: GenreFilter) {
        debug!(operation = "select_genre", genre = %filter, "Genre selected");
        self.genre_filter = filter;
        self.search_query.clear();
        self.current_page = 1;
    }

    /// Selects a genre by id or name; `all` selects the sentinel.
    pub fn select_genre_key(&mut self, key: &str) -> Result<(), ViewError> {
        let filter = resolve_genre_key(key, self.genres.items(), self.movies.items())
            .ok_or_else(|| ViewError::UnknownGenre(key.trim().to_string()))?;
        self.select_genre(filter);
        Ok(())
    }

    /// Clicking the selected genre again clears the restriction.
    pub fn toggle_genre(&mut self, genre: &Genre) {
        let filter = GenreFilter::from_genre(genre);
        if self.genre_filter == filter {
            self.select_genre(GenreFilter::All);
        } else {
            self.select_genre(filter);
        }
    }

    /// Replaces the search text and goes back to page 1.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.current_page = 1;
        debug!(operation = "search", query = %self.search_query, "Search query updated");
    }

    /// Moves to `page` without bounds checking; a page past the end shows nothing.
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page;
    }

    /// Flips the liked flag of one movie and returns the new value.
    pub fn toggle_like(&mut self, movie_id: &str) -> Result<bool, ViewError> {
        if !self.movies.items().iter().any(|m| m.id == movie_id) {
            return Err(ViewError::UnknownMovie(movie_id.to_string()));
        }
        let liked = if self.liked.remove(movie_id) {
            false
        } else {
            self.liked.insert(movie_id.to_string());
            true
        };
        debug!(operation = "toggle_like", movie_id, liked, "Like toggled");
        Ok(liked)
    }

    pub fn is_liked(&self, movie_id: &str) -> bool {
        self.liked.contains(movie_id)
    }

    /// Movies after the genre and search filters, before pagination.
    pub fn filtered(&self) -> Vec<&Movie> {
        apply_filters(self.movies.items(), &self.genre_filter, &self.search_query)
    }

    /// The current page of the filtered movies.
    pub fn visible_rows(&self) -> Vec<Row<'_>> {
        let filtered = self.filtered();
        page_slice(&filtered, self.current_page, self.page_size)
            .iter()
            .map(|&movie| Row {
                movie,
                liked: self.is_liked(&movie.id),
            })
            .collect()
    }

    pub fn page_info(&self) -> PageInfo {
        PageInfo::new(self.current_page, self.page_size, self.filtered().len())
    }

    pub fn count_line(&self) -> String {
        format!("Showing {} movies in the database.", self.filtered().len())
    }

    /// "All Genres" followed by the loaded genres, with the active one flagged.
    pub fn genre_entries(&self) -> Vec<GenreEntry> {
        let mut entries = vec![GenreEntry {
            label: GenreFilter::All.to_string(),
            filter: GenreFilter::All,
            selected: self.genre_filter.is_all(),
        }];
        entries.extend(self.genres.items().iter().map(|genre| {
            let filter = GenreFilter::from_genre(genre);
            GenreEntry {
                label: genre.name.clone(),
                selected: self.genre_filter == filter,
                filter,
            }
        }));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: &str, title: &str, genre: &str) -> Movie {
        Movie {
            id: id.to_string(),
            title: title.to_string(),
            genre: Genre::new(format!("g-{}", genre.to_lowercase()), genre),
            number_in_stock: 1,
            daily_rental_rate: 1.5,
        }
    }

    fn loaded_view(movies: Vec<Movie>, genres: Vec<Genre>) -> CatalogView {
        let mut view = CatalogView::new(5);
        view.apply(LoadEvent::Movies(LoadState::Loaded(movies)));
        view.apply(LoadEvent::Genres(LoadState::Loaded(genres)));
        view
    }

    fn two_movie_view() -> CatalogView {
        loaded_view(
            vec![movie("1", "Terminator", "Action"), movie("2", "Titanic", "Drama")],
            vec![Genre::new("g-action", "Action"), Genre::new("g-drama", "Drama")],
        )
    }

    fn twelve_movie_view() -> CatalogView {
        let movies = (0..12).map(|i| movie(&i.to_string(), &format!("Movie {i}"), "Drama")).collect();
        loaded_view(movies, vec![Genre::new("g-drama", "Drama")])
    }

    fn visible_titles(view: &CatalogView) -> Vec<String> {
        view.visible_rows().iter().map(|r| r.movie.title.clone()).collect()
    }

    #[test]
    fn test_defaults() {
        let view = CatalogView::new(5);
        assert!(view.is_loading());
        assert_eq!(view.genre_filter(), &GenreFilter::All);
        assert_eq!(view.search_query(), "");
        assert_eq!(view.current_page(), 1);
        assert!(view.visible_rows().is_empty());
    }

    #[test]
    fn test_select_action() {
        let mut view = two_movie_view();
        view.select_genre_key("Action").unwrap();
        assert_eq!(visible_titles(&view), vec!["Terminator"]);
    }

    #[test]
    fn test_search_with_all_genres() {
        let mut view = two_movie_view();
        view.select_genre(GenreFilter::All);
        view.set_search_query("tit");
        assert_eq!(visible_titles(&view), vec!["Titanic"]);
    }

    #[test]
    fn test_twelve_movies_three_pages() {
        let mut view = twelve_movie_view();
        assert_eq!(view.page_info().total_pages, 3);

        view.go_to_page(3);
        assert_eq!(visible_titles(&view), vec!["Movie 10", "Movie 11"]);

        view.go_to_page(4);
        assert!(view.visible_rows().is_empty());
        assert_eq!(view.current_page(), 4);
    }

    #[test]
    fn test_select_genre_resets_page_and_query() {
        let mut view = twelve_movie_view();
        view.set_search_query("movie");
        view.go_to_page(3);

        view.select_genre_key("drama").unwrap();
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.search_query(), "");
    }

    #[test]
    fn test_search_resets_page() {
        let mut view = twelve_movie_view();
        view.go_to_page(3);
        view.set_search_query("1");
        assert_eq!(view.current_page(), 1);
        assert_eq!(visible_titles(&view), vec!["Movie 1", "Movie 10", "Movie 11"]);
    }

    #[test]
    fn test_toggle_genre_deselects() {
        let mut view = two_movie_view();
        let action = Genre::new("g-action", "Action");

        view.toggle_genre(&action);
        assert_eq!(view.genre_filter(), &GenreFilter::Genre("Action".into()));

        view.toggle_genre(&action);
        assert_eq!(view.genre_filter(), &GenreFilter::All);
        assert_eq!(view.filtered().len(), 2);
    }

    #[test]
    fn test_unknown_genre_key_keeps_state() {
        let mut view = two_movie_view();
        view.set_search_query("ti");
        let err = view.select_genre_key("Western").unwrap_err();
        assert_eq!(err, ViewError::UnknownGenre("Western".into()));
        assert_eq!(view.search_query(), "ti");
    }

    #[test]
    fn test_toggle_like_is_row_local() {
        let mut view = two_movie_view();
        let before: Vec<Movie> = view.movies().items().to_vec();

        assert_eq!(view.toggle_like("1"), Ok(true));
        assert!(view.is_liked("1"));
        assert!(!view.is_liked("2"));
        assert_eq!(view.movies().items(), before.as_slice());

        let rows = view.visible_rows();
        assert!(rows[0].liked);
        assert!(!rows[1].liked);

        assert_eq!(view.toggle_like("1"), Ok(false));
        assert!(!view.is_liked("1"));
    }

    #[test]
    fn test_like_unknown_movie() {
        let mut view = two_movie_view();
        assert_eq!(view.toggle_like("nope"), Err(ViewError::UnknownMovie("nope".into())));
    }

    #[test]
    fn test_like_survives_filtering() {
        let mut view = two_movie_view();
        view.toggle_like("2").unwrap();
        view.select_genre_key("Action").unwrap();
        view.select_genre(GenreFilter::All);
        assert!(view.is_liked("2"));
    }

    #[test]
    fn test_failed_movies_are_not_loading() {
        let mut view = CatalogView::new(5);
        view.apply(LoadEvent::Movies(LoadState::Failed("connection refused".into())));
        view.apply(LoadEvent::Genres(LoadState::Loaded(Vec::new())));
        assert!(!view.is_loading());
        assert_eq!(view.movies().failure(), Some("connection refused"));
        assert!(view.visible_rows().is_empty());
        assert_eq!(view.count_line(), "Showing 0 movies in the database.");
    }

    #[test]
    fn test_genre_entries() {
        let mut view = two_movie_view();
        view.select_genre_key("Drama").unwrap();
        let entries = view.genre_entries();
        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["All Genres", "Action", "Drama"]);
        assert!(!entries[0].selected);
        assert!(entries[2].selected);
    }

    #[test]
    fn test_count_line_uses_filtered_total() {
        let mut view = twelve_movie_view();
        view.set_search_query("movie 1");
        assert_eq!(view.count_line(), "Showing 3 movies in the database.");
    }

    #[test]
    fn test_zero_page_size_is_bumped() {
        assert_eq!(CatalogView::new(0).page_size(), 1);
    }

    #[test]
    fn test_row_serializes_flat() {
        let view = two_movie_view();
        let rows = view.visible_rows();
        let json = serde_json::to_value(&rows[0]).unwrap();
        assert_eq!(json["title"], "Terminator");
        assert_eq!(json["numberInStock"], 1);
        assert_eq!(json["liked"], false);
    }
}
