use crate::autocomplete::Autocomplete;
use crate::layout::LayoutRegions;

/// Application state
pub struct App {
    pub autocomplete: Autocomplete,
    pub layout_regions: LayoutRegions,
    /// Shown in the header so the user knows where lookups go
    pub endpoint_label: String,
    /// Config problem to show in the status line
    pub config_warning: Option<String>,
    should_quit: bool,
    output: Option<String>,
}

impl App {
    pub fn new(autocomplete: Autocomplete, endpoint_label: String) -> Self {
        Self {
            autocomplete,
            layout_regions: LayoutRegions::new(),
            endpoint_label,
            config_warning: None,
            should_quit: false,
            output: None,
        }
    }

    pub fn with_config_warning(mut self, warning: Option<String>) -> Self {
        self.config_warning = warning;
        self
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Accept the current input value and quit
    ///
    /// A blank input is not submitted.
    pub fn submit(&mut self) {
        let value = self.autocomplete.input.value().trim();
        if value.is_empty() {
            return;
        }
        log::debug!("Submitting {:?}", value);
        self.output = Some(value.to_string());
        self.autocomplete.dismiss();
        self.should_quit = true;
    }

    /// The submitted value, if the user submitted before quitting
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn into_output(self) -> Option<String> {
        self.output
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
