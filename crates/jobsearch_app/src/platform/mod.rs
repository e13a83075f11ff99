pub mod app;
pub mod config;
pub mod controller;
pub mod effects;
pub mod input;
pub mod logging;
pub mod ui;

pub use app::run_app;
pub use controller::SearchController;
pub use ui::surface::{TerminalSurface, UiSurface};
