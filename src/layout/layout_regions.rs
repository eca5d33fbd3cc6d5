use ratatui::layout::Rect;

/// A UI component that can receive mouse presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Header,
    /// The bordered search panel around the input
    Form,
    Input,
    Dropdown,
    StatusLine,
}

/// Screen areas of the components drawn in the last frame
///
/// Areas are `None` until rendered; the dropdown area is reset to `None`
/// on frames where the dropdown is hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub header: Option<Rect>,
    pub form: Option<Rect>,
    pub input: Option<Rect>,
    pub dropdown: Option<Rect>,
    pub status_line: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget every recorded area before a new frame is drawn
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Recorded area of `region`, if it was drawn
    pub fn area_of(&self, region: Region) -> Option<Rect> {
        match region {
            Region::Header => self.header,
            Region::Form => self.form,
            Region::Input => self.input,
            Region::Dropdown => self.dropdown,
            Region::StatusLine => self.status_line,
        }
    }
}
