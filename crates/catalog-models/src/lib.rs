pub mod genre;
pub mod genre_filter;
pub mod load_state;
pub mod movie;
pub mod validation;

pub use genre::Genre;
pub use genre_filter::{GenreFilter, ALL_GENRES_LABEL};
pub use load_state::LoadState;
pub use movie::Movie;
pub use validation::ValidationError;
