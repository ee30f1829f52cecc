use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::ui::{centered_modal, Theme};

/// Help modal component
pub struct HelpModal;

impl HelpModal {
    pub fn render(frame: &mut Frame, area: Rect) {
        let modal_area = centered_modal(area, 50, 14);

        // Clear the background
        frame.render_widget(Clear, modal_area);

        let help_text = vec![
            Line::styled("Keyboard Shortcuts", Style::default().bold().fg(Color::Cyan)),
            Line::raw(""),
            Line::from(vec![
                Span::styled("  j/↓    ", Style::default().fg(Color::Yellow)),
                Span::raw("Move down"),
            ]),
            Line::from(vec![
                Span::styled("  k/↑    ", Style::default().fg(Color::Yellow)),
                Span::raw("Move up"),
            ]),
            Line::from(vec![
                Span::styled("  g      ", Style::default().fg(Color::Yellow)),
                Span::raw("Go to top"),
            ]),
            Line::from(vec![
                Span::styled("  G      ", Style::default().fg(Color::Yellow)),
                Span::raw("Go to bottom"),
            ]),
            Line::from(vec![
                Span::styled("  r      ", Style::default().fg(Color::Yellow)),
                Span::raw("Refresh now / retry after an error"),
            ]),
            Line::from(vec![
                Span::styled("  Esc    ", Style::default().fg(Color::Yellow)),
                Span::raw("Close modal"),
            ]),
            Line::from(vec![
                Span::styled("  q      ", Style::default().fg(Color::Yellow)),
                Span::raw("Quit"),
            ]),
            Line::raw(""),
            Line::styled("Press Esc to close", Style::default().fg(Color::DarkGray)),
        ];

        let block = Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Theme::MODAL_BORDER))
            .style(Style::default().bg(Theme::MODAL_BG));

        let paragraph = Paragraph::new(help_text).block(block);

        frame.render_widget(paragraph, modal_area);
    }
}
