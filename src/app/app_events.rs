use std::io;
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use super::app_state::App;
use super::mouse_click::handle_click;
use crate::autocomplete::KeyDisposition;
use crate::layout::region_at;

impl App {
    /// Wait up to `max_wait` for one terminal event, handle it, then advance
    /// the autocomplete timers
    ///
    /// The wait is shortened when a debounced lookup falls due sooner.
    pub fn handle_events(&mut self, max_wait: Duration) -> io::Result<()> {
        let timeout = self
            .autocomplete
            .time_until_due(Instant::now())
            .map_or(max_wait, |due| due.min(max_wait));

        if event::poll(timeout)? {
            self.handle_event(event::read()?, Instant::now());
        }

        self.autocomplete.tick(Instant::now());
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key, now),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Paste(text) => self.handle_paste_event(text, now),
            _ => {}
        }
    }

    /// Handle key press events
    ///
    /// The dropdown gets first refusal on Up, Down, Enter and Esc. Keys it
    /// leaves alone get the app defaults: Enter submits, Esc quits, anything
    /// else edits the input.
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if self.autocomplete.handle_key(key) == KeyDisposition::Intercepted {
            return;
        }

        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => self.quit(),
            _ => self.autocomplete.handle_edit_key(key, now),
        }
    }

    /// Only left-button presses are routed; releases, drags and scrolls are
    /// ignored
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            let region = region_at(&self.layout_regions, mouse.column, mouse.row);
            handle_click(self, region, mouse);
        }
    }

    /// Insert pasted text at the cursor
    pub fn handle_paste_event(&mut self, text: String, now: Instant) {
        if self.autocomplete.input.insert_text(&text) {
            self.autocomplete.on_input_changed(now);
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
