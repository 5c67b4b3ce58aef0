pub mod filter;
pub mod loader;
pub mod pagination;
pub mod view;

pub use filter::{apply_filters, filter_by_genre, filter_by_title, resolve_genre_key};
pub use loader::{CatalogLoader, LoadEvent};
pub use pagination::{page_count, page_slice, PageInfo};
pub use view::{CatalogView, GenreEntry, Row, ViewError};
