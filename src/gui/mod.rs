//! GUI module - User interface components

mod add_prompt;
mod app;
mod edit_window;
mod main_view;

pub use add_prompt::{AddPrompt, AddPromptAction};
pub use app::DashboardApp;
pub use edit_window::{EditAction, EditWindow};
pub use main_view::{MainAction, MainView};
