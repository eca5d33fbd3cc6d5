//! Autocomplete controller
//!
//! Binds one text input to one dropdown. Input changes go through the
//! debouncer to the request coordinator; fresh responses are rendered into
//! the dropdown; the selection state machine drives the active row.
//!
//! Everything here runs on the UI thread. The only asynchronous part is the
//! worker behind [`SuggestState`], whose responses are applied in
//! [`Autocomplete::tick`].

use std::time::{Duration, Instant};

use crate::dropdown::DropdownState;
use crate::input::InputState;
use crate::selection::SelectionState;
use crate::suggest::{Debouncer, SuggestOutcome, SuggestState, search_query};

pub struct Autocomplete {
    pub input: InputState,
    pub dropdown: DropdownState,
    pub selection: SelectionState,
    pub debouncer: Debouncer,
    pub suggest: SuggestState,
}

impl Autocomplete {
    /// Bind an input and a dropdown to a request coordinator
    pub fn new(input: InputState, dropdown: DropdownState, suggest: SuggestState) -> Self {
        Self {
            input,
            dropdown,
            selection: SelectionState::new(),
            debouncer: Debouncer::default(),
            suggest,
        }
    }

    /// React to a user edit of the input value
    ///
    /// Short queries close the dropdown and stop any pending or in-flight
    /// lookup. Anything else (re)schedules a debounced lookup.
    pub fn on_input_changed(&mut self, now: Instant) {
        match search_query(self.input.value()) {
            Some(query) => {
                let query = query.to_string();
                self.debouncer.schedule(query, now);
            }
            None => self.dismiss(),
        }
    }

    /// Advance timers and apply worker responses
    pub fn tick(&mut self, now: Instant) {
        if let Some(query) = self.debouncer.take_due(now) {
            self.suggest.send_request(query);
        }
        self.apply_responses();
    }

    /// How long the event loop may sleep before the next lookup is due
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_until_due(now)
    }

    /// Apply the outcome of the live request, if it has arrived
    pub fn apply_responses(&mut self) {
        while let Some(outcome) = self.suggest.poll_response() {
            match outcome {
                SuggestOutcome::Loaded(suggestions) => self.render_suggestions(suggestions),
                SuggestOutcome::Failed(error) => {
                    log::debug!("Clearing suggestions after failure: {}", error);
                    self.clear_suggestions();
                }
            }
        }
    }

    /// Replace the dropdown contents; a fresh list has no selection
    pub fn render_suggestions(&mut self, suggestions: Vec<String>) {
        self.dropdown.render(suggestions);
        self.selection.clear_selection();
    }

    /// Empty and hide the dropdown
    pub fn clear_suggestions(&mut self) {
        self.dropdown.clear();
        self.selection.clear_selection();
    }

    /// Close the dropdown and drop any pending or in-flight lookup
    pub fn dismiss(&mut self) {
        self.debouncer.cancel();
        self.suggest.cancel_in_flight_request();
        self.clear_suggestions();
    }

    /// A lookup is scheduled or in flight
    pub fn is_busy(&self) -> bool {
        self.debouncer.is_pending() || self.suggest.has_in_flight_request()
    }

    pub fn is_open(&self) -> bool {
        self.dropdown.is_open()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.selection.get_selected()
    }

    pub(super) fn select_next(&mut self) {
        self.selection.navigate_next(self.dropdown.len());
        self.sync_active_row();
    }

    pub(super) fn select_previous(&mut self) {
        self.selection.navigate_previous(self.dropdown.len());
        self.sync_active_row();
    }

    fn sync_active_row(&mut self) {
        if let Some(index) = self.selection.get_selected() {
            self.dropdown.set_active(index);
        }
    }

    /// Copy row `index` into the input and close the dropdown
    ///
    /// Returns false if there is no such row.
    pub fn commit(&mut self, index: usize) -> bool {
        let Some(text) = self.dropdown.row_text(index).map(str::to_string) else {
            return false;
        };
        log::debug!("Committing suggestion {}", index);
        self.input.set_value(&text);
        self.dismiss();
        true
    }
}

#[cfg(test)]
#[path = "autocomplete_state_tests.rs"]
mod autocomplete_state_tests;
