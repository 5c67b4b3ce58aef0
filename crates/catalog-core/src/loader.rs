use catalog_models::{Genre, LoadState, Movie};
use catalog_sources::CatalogSource;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::view::CatalogView;

/// A finished collection read, successful or not.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadEvent {
    Movies(LoadState<Vec<Movie>>),
    Genres(LoadState<Vec<Genre>>),
}

impl LoadEvent {
    pub fn collection(&self) -> &'static str {
        match self {
            LoadEvent::Movies(_) => "movies",
            LoadEvent::Genres(_) => "genres",
        }
    }
}

/// Runs the two independent catalog reads for one view.
///
/// Each read is its own task; results come back over a channel in whatever
/// order they finish. Dropping the loader (or calling [`CatalogLoader::abandon`])
/// aborts any read still in flight, and nothing it would have produced is
/// delivered afterwards.
pub struct CatalogLoader {
    events: mpsc::Receiver<LoadEvent>,
    tasks: Vec<JoinHandle<()>>,
    pending: usize,
}

impl CatalogLoader {
    /// Starts both reads. Must be called from within a tokio runtime.
    pub fn spawn(source: Arc<dyn CatalogSource>) -> Self {
        let (tx, events) = mpsc::channel(2);

        info!(operation = "catalog_load_start", source = source.source_name(), "Loading movies and genres");

        let movies_task = {
            let source = Arc::clone(&source);
            let tx = tx.clone();
            tokio::spawn(async move {
                let state = LoadState::from_result(source.fetch_movies().await);
                if tx.send(LoadEvent::Movies(state)).await.is_err() {
                    debug!(operation = "load_movies", "View is gone, discarding movies");
                }
            })
        };

        let genres_task = tokio::spawn(async move {
            let state = LoadState::from_result(source.fetch_genres().await);
            if tx.send(LoadEvent::Genres(state)).await.is_err() {
                debug!(operation = "load_genres", "View is gone, discarding genres");
            }
        });

        Self {
            events,
            tasks: vec![movies_task, genres_task],
            pending: 2,
        }
    }

    /// Reads still outstanding.
    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn is_finished(&self) -> bool {
        self.pending == 0
    }

    /// Waits for the next read to finish. `None` once both have been
    /// delivered or the loader was abandoned.
    pub async fn next_event(&mut self) -> Option<LoadEvent> {
        if self.pending == 0 {
            return None;
        }
        let event = self.events.recv().await?;
        self.pending -= 1;
        debug!(operation = "catalog_load_event", collection = event.collection(), pending = self.pending, "Read finished");
        Some(event)
    }

    /// Applies every remaining read to `view`, in completion order.
    pub async fn load_into(&mut self, view: &mut CatalogView) {
        while let Some(event) = self.next_event().await {
            view.apply(event);
        }
        info!(
            operation = "catalog_load_complete",
            movies = view.movies().items().len(),
            genres = view.genres().items().len(),
            "Catalog load finished"
        );
    }

    /// Stops both reads and drops anything not yet delivered.
    pub fn abandon(&mut self) {
        if self.pending > 0 {
            debug!(operation = "catalog_load_abandon", pending = self.pending, "Abandoning in-flight reads");
        }
        for task in &self.tasks {
            task.abort();
        }
        self.events.close();
        self.pending = 0;
    }
}

impl Drop for CatalogLoader {
    fn drop(&mut self) {
        self.abandon();
    }
}
