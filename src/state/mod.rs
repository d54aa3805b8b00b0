//! Application state module

mod app_state;
mod catalog;
mod forms;
mod handlers;
mod product;

pub use app_state::*;
pub use catalog::*;
pub use forms::*;
pub use handlers::*;
pub use product::*;
