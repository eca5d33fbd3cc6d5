use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use crate::dropdown::render_dropdown;

const FORM_HEIGHT: u16 = 5;
const INPUT_HEIGHT: u16 = 3;

impl App {
    /// Draw the search screen and record where everything landed
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(FORM_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());
        let (header_area, form_area, status_area) = (layout[0], layout[1], layout[3]);

        self.render_header(frame, header_area);
        let input_area = self.render_form(frame, form_area);
        self.render_status_line(frame, status_area);

        // Drawn last so it overlays everything below the input
        self.layout_regions.dropdown =
            render_dropdown(&mut self.autocomplete.dropdown, frame, input_area);
    }

    fn render_header(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                " bookfind ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("→ {}", self.endpoint_label),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        self.layout_regions.header = Some(area);
    }

    /// Draw the search panel and the input inside it; returns the input area
    fn render_form(&mut self, frame: &mut Frame, area: Rect) -> Rect {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let input_area = Rect {
            height: inner.height.min(INPUT_HEIGHT),
            ..inner
        };
        frame.render_widget(&self.autocomplete.input.textarea, input_area);

        self.layout_regions.form = Some(area);
        self.layout_regions.input = Some(input_area);
        input_area
    }

    fn render_status_line(&mut self, frame: &mut Frame, area: Rect) {
        let line = if let Some(warning) = &self.config_warning {
            Line::from(Span::styled(
                format!(" ⚠ {}", warning),
                Style::default().fg(Color::Yellow),
            ))
        } else {
            let mut spans = vec![Span::styled(
                " ↑↓ select  Enter choose  Esc close  Ctrl+C quit",
                Style::default().fg(Color::DarkGray),
            )];
            if self.autocomplete.is_busy() {
                spans.push(Span::styled(
                    "  searching…",
                    Style::default().fg(Color::Cyan),
                ));
            }
            Line::from(spans)
        };
        frame.render_widget(Paragraph::new(line), area);
        self.layout_regions.status_line = Some(area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
