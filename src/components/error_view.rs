use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::ui::{centered_modal, Theme};

/// Full-body panel shown when a fetch cycle fails
pub struct ErrorView;

impl ErrorView {
    pub fn render(frame: &mut Frame, area: Rect, message: &str, has_stale_data: bool) {
        let panel = centered_modal(area, 60, 9);

        let block = Block::default()
            .title(" Fetch failed ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Theme::RED))
            .style(Style::default().bg(Theme::MODAL_BG));

        let stale_note = if has_stale_data {
            "Showing the last successful snapshot."
        } else {
            "No data loaded yet."
        };

        let lines = vec![
            Line::raw(""),
            Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(Theme::RED),
            )),
            Line::raw(""),
            Line::from(Span::styled(
                stale_note,
                Style::default().fg(Theme::FG_DARK),
            )),
            Line::raw(""),
            Line::from(vec![
                Span::styled("Auto-refresh is paused. Press ", Style::default().fg(Theme::FG_DARK)),
                Span::styled("r", Style::default().fg(Theme::CYAN).add_modifier(Modifier::BOLD)),
                Span::styled(" to retry.", Style::default().fg(Theme::FG_DARK)),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, panel);
    }
}
