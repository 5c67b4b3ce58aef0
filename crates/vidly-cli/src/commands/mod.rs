pub mod browse;
pub mod config;
pub mod genres;
pub mod load_ui;
pub mod movies;
pub mod prompts;
pub mod render;
