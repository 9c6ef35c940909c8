//! Reusable TUI widgets.

pub mod form;
pub mod result_panel;

pub use form::{Form, UNSET_CHOICE, draw_form};
pub use result_panel::draw_result_panel;
