//! Reusable UI components

mod button;
mod dialog;

pub use button::{button_width, render_action_button, BUTTON_HEIGHT};
pub use dialog::{render_confirm_dialog, render_help_dialog};
