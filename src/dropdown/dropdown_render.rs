//! Dropdown popup rendering
//!
//! Draws the suggestion rows as a popup directly under the input field.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::dropdown_state::{DropdownState, MAX_VISIBLE_ROWS};
use super::escape::sanitize_for_terminal;
use crate::widgets::popup;

// Dropdown popup display constants
const MIN_POPUP_WIDTH: usize = 20;
// Text width bounds; popup_below_anchor further clamps the popup to the input
const MAX_POPUP_WIDTH: usize = 72;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 1;

/// Render the dropdown under the input field
///
/// Updates the dropdown's viewport to the number of rows that fit. Returns
/// the popup area, or `None` when nothing was drawn.
pub fn render_dropdown(
    dropdown: &mut DropdownState,
    frame: &mut Frame,
    input_area: Rect,
) -> Option<Rect> {
    if !dropdown.is_open() {
        return None;
    }

    let wanted_rows = dropdown.len().min(MAX_VISIBLE_ROWS) as u16;
    let max_text_width = dropdown
        .rows()
        .iter()
        .map(|row| sanitize_for_terminal(row.text()).width())
        .max()
        .unwrap_or(0)
        .clamp(MIN_POPUP_WIDTH, MAX_POPUP_WIDTH);
    let popup_width = (max_text_width as u16) + POPUP_PADDING;

    let popup_area = popup::popup_below_anchor(
        input_area,
        frame.area(),
        popup_width,
        wanted_rows + POPUP_BORDER_HEIGHT,
        POPUP_OFFSET_X,
    );
    if popup_area.height <= POPUP_BORDER_HEIGHT {
        return None;
    }
    dropdown.set_viewport_rows((popup_area.height - POPUP_BORDER_HEIGHT) as usize);

    let items: Vec<ListItem> = dropdown
        .visible_rows()
        .iter()
        .map(|row| {
            let text = sanitize_for_terminal(row.text());
            let line = if row.is_active() {
                // Highlight active row with high contrast colors
                Line::from(Span::styled(
                    format!("► {}", text),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", text),
                    Style::default().fg(Color::White).bg(Color::Black),
                ))
            };
            ListItem::new(line)
        })
        .collect();

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(" Suggestions ")
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    if let Some(active) = dropdown.active_index() {
        block = block.title_bottom(format!(" {}/{} ", active + 1, dropdown.len()));
    }

    // Clear the background area to prevent transparency
    popup::clear_area(frame, popup_area);
    frame.render_widget(List::new(items).block(block), popup_area);

    Some(popup_area)
}

#[cfg(test)]
#[path = "dropdown_render_tests.rs"]
mod dropdown_render_tests;
