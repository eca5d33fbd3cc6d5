//! Suggestion dropdown
//!
//! [`DropdownState`] is the list container: it holds the rendered rows, the
//! visible flag, the active-row flag and the scroll window.
//! [`render_dropdown`] draws it as a popup under the input.

mod dropdown_render;
mod dropdown_state;
mod escape;

pub use dropdown_render::render_dropdown;
pub use dropdown_state::{DropdownState, MAX_VISIBLE_ROWS, SuggestionRow};
pub use escape::{escape_html, sanitize_for_terminal};
