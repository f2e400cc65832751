//! Reusable UI components

mod banner;
mod button;
mod dialog;

pub use banner::{render_banner, BANNER_HEIGHT};
pub use button::{render_button, BUTTON_HEIGHT};
pub use dialog::render_error_dialog;
