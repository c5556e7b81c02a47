//! Modal overlays drawn on top of the page.
//!
//! Popups take the keyboard while shown; see `commands::InputContext`.

pub mod help;
pub mod open_plot;

pub use help::render as render_help;
pub use open_plot::render as render_open_plot_prompt;
