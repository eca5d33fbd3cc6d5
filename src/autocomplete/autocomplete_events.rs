//! Keyboard and pointer handling for the autocomplete controller

use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::autocomplete_state::Autocomplete;

/// Whether the controller consumed a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Handled here; the host must not apply its default behavior
    Intercepted,
    /// Not handled; the host applies its default behavior
    Default,
}

/// Where a mouse button went down, relative to the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// A dropdown row, by suggestion index
    Row(usize),
    /// The dropdown outside any row (border, padding)
    Dropdown,
    /// The text input
    Input,
    /// The form panel around the input
    Form,
    /// Anywhere else
    Outside,
}

impl Autocomplete {
    /// Handle the keys the dropdown owns: Up, Down, Enter and Esc
    ///
    /// Up/Down/Enter are only intercepted while the dropdown is open, and
    /// Enter only when a row is selected.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyDisposition {
        match key.code {
            KeyCode::Down if self.is_open() => {
                self.select_next();
                KeyDisposition::Intercepted
            }
            KeyCode::Up if self.is_open() => {
                self.select_previous();
                KeyDisposition::Intercepted
            }
            KeyCode::Enter if self.is_open() => match self.active_index() {
                Some(index) => {
                    self.commit(index);
                    KeyDisposition::Intercepted
                }
                None => KeyDisposition::Default,
            },
            KeyCode::Esc => {
                let had_work = self.is_open() || self.is_busy();
                self.dismiss();
                if had_work {
                    KeyDisposition::Intercepted
                } else {
                    KeyDisposition::Default
                }
            }
            _ => KeyDisposition::Default,
        }
    }

    /// Apply an editing key to the input and observe the change
    pub fn handle_edit_key(&mut self, key: KeyEvent, now: Instant) {
        if self.input.apply_key(key) {
            self.on_input_changed(now);
        }
    }

    /// Handle a mouse button press
    ///
    /// Rows commit on button-down; releases are never routed here.
    pub fn handle_pointer_press(&mut self, target: PointerTarget) {
        match target {
            PointerTarget::Row(index) => {
                self.commit(index);
            }
            PointerTarget::Outside => {
                if self.is_open() || self.is_busy() {
                    self.dismiss();
                }
            }
            PointerTarget::Dropdown | PointerTarget::Input | PointerTarget::Form => {}
        }
    }
}

#[cfg(test)]
#[path = "autocomplete_events_tests.rs"]
mod autocomplete_events_tests;
