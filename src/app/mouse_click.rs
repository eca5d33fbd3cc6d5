//! Mouse click handling
//!
//! Maps a press to what it landed on from the widget's point of view.

use ratatui::crossterm::event::MouseEvent;

use super::app_state::App;
use crate::autocomplete::PointerTarget;
use crate::layout::Region;

/// Handle left mouse button press for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    let target = match region {
        Some(Region::Dropdown) => dropdown_target(app, mouse),
        Some(Region::Input) => PointerTarget::Input,
        Some(Region::Form) => PointerTarget::Form,
        Some(Region::Header) | Some(Region::StatusLine) | None => PointerTarget::Outside,
    };
    app.autocomplete.handle_pointer_press(target);
}

/// Work out which suggestion row is under the cursor
///
/// Presses on the popup border hit the dropdown but no row.
fn dropdown_target(app: &App, mouse: MouseEvent) -> PointerTarget {
    let Some(area) = app.layout_regions.dropdown else {
        return PointerTarget::Dropdown;
    };

    let inner_x = area.x.saturating_add(1);
    let inner_y = area.y.saturating_add(1);
    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2);

    if mouse.column < inner_x
        || mouse.column >= inner_x.saturating_add(inner_width)
        || mouse.row < inner_y
        || mouse.row >= inner_y.saturating_add(inner_height)
    {
        return PointerTarget::Dropdown;
    }

    let line = mouse.row.saturating_sub(inner_y) as usize;
    app.autocomplete
        .dropdown
        .row_at_line(line)
        .map_or(PointerTarget::Dropdown, PointerTarget::Row)
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
