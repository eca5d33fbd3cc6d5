//! Terminal host for the autocomplete widget
//!
//! Owns the controller, draws the search screen and routes terminal events.

mod app_events;
mod app_render;
mod app_state;
mod mouse_click;

pub use app_state::App;
