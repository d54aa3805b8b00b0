//! Dialog components for TUI

mod base;
mod confirm_dialog;
mod help_dialog;

pub use confirm_dialog::render_confirm_dialog;
pub use help_dialog::render_help_dialog;
