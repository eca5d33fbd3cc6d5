//! Selection state for dropdown suggestions
//!
//! Tracks the highlighted suggestion index. `None` is "no selection".

/// Selection state for suggestion navigation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Currently selected suggestion index (None = no selection)
    selected_index: Option<usize>,
}

impl SelectionState {
    /// Create a new SelectionState with no selection
    pub fn new() -> Self {
        Self {
            selected_index: None,
        }
    }

    /// Select a specific suggestion index
    pub fn select_index(&mut self, index: usize) {
        self.selected_index = Some(index);
    }

    /// Clear the current selection
    pub fn clear_selection(&mut self) {
        self.selected_index = None;
    }

    /// Get the currently selected suggestion index
    pub fn get_selected(&self) -> Option<usize> {
        self.selected_index
    }

    /// Navigate to the next suggestion (Down)
    ///
    /// Starts at the first suggestion and wraps around after the last one.
    /// Does nothing when there are no suggestions.
    pub fn navigate_next(&mut self, suggestion_count: usize) {
        if suggestion_count == 0 {
            return;
        }

        self.selected_index = match self.selected_index {
            Some(current) => Some((current + 1) % suggestion_count),
            None => Some(0),
        };
    }

    /// Navigate to the previous suggestion (Up)
    ///
    /// Starts at the last suggestion and wraps around before the first one.
    /// Does nothing when there are no suggestions.
    pub fn navigate_previous(&mut self, suggestion_count: usize) {
        if suggestion_count == 0 {
            return;
        }

        self.selected_index = match self.selected_index {
            Some(0) | None => Some(suggestion_count - 1),
            Some(current) => Some(current.min(suggestion_count) - 1),
        };
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
