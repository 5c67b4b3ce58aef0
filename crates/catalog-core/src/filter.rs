use catalog_models::{Genre, GenreFilter, Movie};

/// Movies whose genre name equals the filter's, or all of them for `All`.
pub fn filter_by_genre<'a>(movies: &'a [Movie], filter: &GenreFilter) -> Vec<&'a Movie> {
    movies.iter().filter(|m| filter.matches(m)).collect()
}

/// Case-insensitive title substring match. Applying it twice with the same
/// query changes nothing.
pub fn filter_by_title<'a, I>(movies: I, query: &str) -> Vec<&'a Movie>
where
    I: IntoIterator<Item = &'a Movie>,
{
    movies.into_iter().filter(|m| m.title_contains(query)).collect()
}

/// Genre filter over the full collection, then the title search.
pub fn apply_filters<'a>(movies: &'a [Movie], filter: &GenreFilter, query: &str) -> Vec<&'a Movie> {
    filter_by_title(filter_by_genre(movies, filter), query)
}

/// Turns a user-typed key into a filter.
///
/// `all` / `All Genres` / blank select the sentinel. Otherwise the key is
/// matched by id or name against the loaded genres first, then against genre
/// names that appear on movies (the genre list may still be loading).
pub fn resolve_genre_key(key: &str, genres: &[Genre], movies: &[Movie]) -> Option<GenreFilter> {
    if GenreFilter::is_all_key(key) {
        return Some(GenreFilter::All);
    }

    genres
        .iter()
        .find(|g| g.matches_key(key))
        .or_else(|| movies.iter().map(|m| &m.genre).find(|g| g.matches_key(key)))
        .map(GenreFilter::from_genre)
}
