//! Form rendering module
//!
//! - `field_renderer`: one control per field kind
//! - `tool_form`: tabs, sections, dynamic lists and the action footer
//! - `preview`: generated document text

mod field_renderer;
mod preview;
mod tool_form;

pub use tool_form::draw_tool_form;
