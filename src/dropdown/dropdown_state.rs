//! Dropdown list container state

use super::escape::escape_html;

/// Maximum rows shown at once; longer lists scroll
pub const MAX_VISIBLE_ROWS: usize = 6;

/// One selectable row, tagged with its position in the suggestion list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRow {
    index: usize,
    text: String,
    active: bool,
}

impl SuggestionRow {
    pub fn index(&self) -> usize {
        self.index
    }

    /// The original, unescaped suggestion text
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// HTML for this row with the text escaped
    pub fn markup(&self) -> String {
        let class = if self.active {
            "suggestion-item active"
        } else {
            "suggestion-item"
        };
        format!(
            r#"<li class="{}" data-index="{}">{}</li>"#,
            class,
            self.index,
            escape_html(&self.text)
        )
    }
}

/// The dropdown's rows plus its presentation flags
#[derive(Debug, Clone)]
pub struct DropdownState {
    rows: Vec<SuggestionRow>,
    visible: bool,
    scroll_offset: usize,
    viewport_rows: usize,
}

impl Default for DropdownState {
    fn default() -> Self {
        Self::new()
    }
}

impl DropdownState {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            visible: false,
            scroll_offset: 0,
            viewport_rows: MAX_VISIBLE_ROWS,
        }
    }

    /// Replace the rows with `suggestions`, in order
    ///
    /// An empty list clears and hides the dropdown. A fresh list never has an
    /// active row.
    pub fn render(&mut self, suggestions: Vec<String>) {
        if suggestions.is_empty() {
            self.clear();
            return;
        }

        self.rows = suggestions
            .into_iter()
            .enumerate()
            .map(|(index, text)| SuggestionRow {
                index,
                text,
                active: false,
            })
            .collect();
        self.scroll_offset = 0;
        self.visible = true;
    }

    /// Remove all rows and hide the dropdown
    pub fn clear(&mut self) {
        self.rows.clear();
        self.visible = false;
        self.scroll_offset = 0;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Visible with at least one row
    pub fn is_open(&self) -> bool {
        self.visible && !self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[SuggestionRow] {
        &self.rows
    }

    pub fn row_text(&self, index: usize) -> Option<&str> {
        self.rows.get(index).map(SuggestionRow::text)
    }

    /// Index of the row carrying the active flag
    pub fn active_index(&self) -> Option<usize> {
        self.rows.iter().position(|row| row.active)
    }

    /// Move the active flag to `index` and scroll it into view
    ///
    /// Out-of-range indices leave the dropdown unchanged.
    pub fn set_active(&mut self, index: usize) {
        if index >= self.rows.len() {
            return;
        }
        for row in &mut self.rows {
            row.active = row.index == index;
        }
        self.scroll_into_view(index);
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn viewport_rows(&self) -> usize {
        self.viewport_rows
    }

    /// Update the number of rows that fit on screen
    ///
    /// Called by the renderer; keeps the active row visible.
    pub fn set_viewport_rows(&mut self, rows: usize) {
        self.viewport_rows = rows.max(1);
        let max_offset = self.rows.len().saturating_sub(self.viewport_rows);
        self.scroll_offset = self.scroll_offset.min(max_offset);
        if let Some(active) = self.active_index() {
            self.scroll_into_view(active);
        }
    }

    /// Scroll the minimum distance that brings `index` into the window
    fn scroll_into_view(&mut self, index: usize) {
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if index >= self.scroll_offset + self.viewport_rows {
            self.scroll_offset = index + 1 - self.viewport_rows;
        }
    }

    /// Rows inside the current scroll window
    pub fn visible_rows(&self) -> &[SuggestionRow] {
        let end = (self.scroll_offset + self.viewport_rows).min(self.rows.len());
        let start = self.scroll_offset.min(end);
        &self.rows[start..end]
    }

    /// Map a line inside the scroll window to a row index
    pub fn row_at_line(&self, line: usize) -> Option<usize> {
        let index = self.scroll_offset + line;
        (line < self.viewport_rows && index < self.rows.len()).then_some(index)
    }

    /// Serialise the dropdown as an HTML list
    pub fn to_markup(&self) -> String {
        if !self.is_open() {
            return r#"<ul class="suggestions"></ul>"#.to_string();
        }
        let items: String = self.rows.iter().map(SuggestionRow::markup).collect();
        format!(r#"<ul class="suggestions visible">{}</ul>"#, items)
    }
}

#[cfg(test)]
#[path = "dropdown_state_tests.rs"]
mod dropdown_state_tests;
