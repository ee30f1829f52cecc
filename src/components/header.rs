use chrono::{DateTime, Local};
use ratatui::{
    prelude::*,
    widgets::Paragraph,
};

use crate::ui::Theme;

/// Header component with title, last update time, and poll status
pub struct Header;

impl Header {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        last_update: Option<DateTime<Local>>,
        poll_secs: u64,
        loading: bool,
        paused: bool,
    ) {
        use crate::ui::layout::header_layout;

        let (title_area, status_area) = header_layout(area);

        // Title
        let title = Paragraph::new(" Visits TUI ")
            .style(Style::default().fg(Theme::BLUE).add_modifier(Modifier::BOLD));
        frame.render_widget(title, title_area);

        let updated = match last_update {
            Some(ts) => ts.format("%H:%M:%S").to_string(),
            None => "--:--:--".to_string(),
        };

        let (poll_text, poll_color) = if loading {
            ("refreshing…".to_string(), Theme::YELLOW)
        } else if paused {
            ("paused - r to retry".to_string(), Theme::RED)
        } else {
            (format!("auto {}s", poll_secs), Theme::GREEN)
        };

        let spans = vec![
            Span::styled("updated ", Style::default().fg(Theme::FG_DARK)),
            Span::styled(updated, Style::default().fg(Theme::FG)),
            Span::styled(" │ ", Style::default().fg(Theme::BORDER)),
            Span::styled(poll_text, Style::default().fg(poll_color)),
        ];

        let status_line = Line::from(spans);
        let status_widget = Paragraph::new(status_line).alignment(Alignment::Right);
        frame.render_widget(status_widget, status_area);
    }
}
