use crate::output::Output;
use catalog_core::{CatalogLoader, CatalogView, LoadEvent};
use catalog_sources::CatalogSource;
use color_eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::sync::Arc;
use std::time::Duration;

/// Spinner shown while the catalog reads are in flight. Falls back to
/// structured log lines when there is no terminal to draw on.
pub struct LoadUI {
    spinner: ProgressBar,
    interactive: bool,
}

impl LoadUI {
    pub fn new(output: &Output) -> Self {
        let interactive = is_interactive() && output.is_human() && !output.is_quiet();

        let spinner = if interactive {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        if interactive {
            spinner.enable_steady_tick(Duration::from_millis(80));
        } else {
            tracing::debug!(operation = "ui_init", mode = "non_interactive", "Spinner disabled");
        }

        Self { spinner, interactive }
    }

    pub fn set_message(&self, msg: String) {
        if self.interactive {
            self.spinner.set_message(msg);
        } else {
            tracing::info!(operation = "progress", message = %msg, "Load progress");
        }
    }

    pub fn finish(&self) {
        if self.interactive {
            self.spinner.finish_and_clear();
        }
    }
}

pub fn is_interactive() -> bool {
    std::io::stdout().is_terminal() && std::io::stderr().is_terminal()
}

fn progress_message(event: &LoadEvent, pending: usize) -> String {
    let waiting = if pending == 0 { String::new() } else { ", waiting for the rest".to_string() };
    match event {
        LoadEvent::Movies(state) if state.is_loaded() => format!("Loaded {} movies{}", state.items().len(), waiting),
        LoadEvent::Genres(state) if state.is_loaded() => format!("Loaded {} genres{}", state.items().len(), waiting),
        other => format!("Failed to load {}{}", other.collection(), waiting),
    }
}

/// Mounts a fresh view: starts both reads and applies them as they land.
///
/// Ctrl-C while loading abandons the reads; nothing they return afterwards
/// reaches the view.
pub async fn load_view(source: Arc<dyn CatalogSource>, page_size: usize, output: &Output) -> Result<CatalogView> {
    let ui = LoadUI::new(output);
    ui.set_message("Loading movies and genres...".to_string());

    let mut loader = CatalogLoader::spawn(source);
    let mut view = CatalogView::new(page_size);

    loop {
        tokio::select! {
            event = loader.next_event() => match event {
                Some(event) => {
                    ui.set_message(progress_message(&event, loader.pending()));
                    view.apply(event);
                }
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                loader.abandon();
                ui.finish();
                return Err(color_eyre::eyre::eyre!("Interrupted while loading the catalog"));
            }
        }
    }

    ui.finish();
    Ok(view)
}
