use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

/// The single-line text input the dropdown is bound to
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Book title ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text("Start typing a title…");

        Self { textarea }
    }

    /// Current value of the input
    pub fn value(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Replace the value and put the cursor at the end
    ///
    /// Programmatic changes do not count as user input.
    pub fn set_value(&mut self, value: &str) {
        let single_line = value.replace(['\r', '\n'], " ");
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
        self.textarea.insert_str(&single_line);
    }

    /// Insert text at the cursor, flattening line breaks
    ///
    /// Returns true if the value changed.
    pub fn insert_text(&mut self, text: &str) -> bool {
        let single_line = text.replace("\r\n", " ").replace(['\r', '\n'], " ");
        if single_line.is_empty() {
            return false;
        }
        self.textarea.insert_str(&single_line)
    }

    /// Apply an editing key to the input
    ///
    /// Returns true if the value changed. Keys that would insert a line
    /// break are ignored.
    pub fn apply_key(&mut self, key: KeyEvent) -> bool {
        if is_line_break(key) {
            return false;
        }
        let before = self.value().to_string();
        self.textarea.input(key);
        self.value() != before
    }
}

fn is_line_break(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => true,
        KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
