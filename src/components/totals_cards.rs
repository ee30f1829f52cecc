use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::{cards_layout, Theme};
use crate::usage::DashboardTotals;

/// Headline stat cards: app count, total uses, feature count, average
pub struct TotalsCards;

impl TotalsCards {
    pub fn render(frame: &mut Frame, area: Rect, totals: &DashboardTotals) {
        let cards = cards_layout(area);

        Self::card(frame, cards[0], "Apps", totals.apps.to_string(), Theme::BLUE);
        Self::card(
            frame,
            cards[1],
            "Total Uses",
            format_count(totals.total_uses),
            Theme::MAUVE,
        );
        Self::card(
            frame,
            cards[2],
            "Features",
            totals.total_features.to_string(),
            Theme::PINK,
        );
        Self::card(
            frame,
            cards[3],
            "Avg / App",
            format_count(totals.avg_uses),
            Theme::GREEN,
        );
    }

    fn card(frame: &mut Frame, area: Rect, label: &str, value: String, accent: Color) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Theme::BORDER));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(Span::styled(
                value,
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                label.to_string(),
                Style::default().fg(Theme::FG_DARK),
            )),
        ];

        let card = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(card, inner);
    }
}

/// Thousands-separated count for the cards
pub fn format_count(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
