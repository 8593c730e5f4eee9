//! Terminal user interface for the estimation wizard, built with ratatui.

mod app;
mod ui;

pub use app::run_tui;
