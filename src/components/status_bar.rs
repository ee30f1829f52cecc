use ratatui::{
    prelude::*,
    widgets::Paragraph,
};

use crate::ui::{key_desc_span, key_span, Theme};

/// Keybinding definition
pub struct KeyBinding {
    pub key: &'static str,
    pub desc: &'static str,
}

/// Status bar component (bottom of screen) - keybindings only
pub struct StatusBar;

impl StatusBar {
    /// Get keybindings for the dashboard view
    pub fn dashboard_keybindings() -> Vec<KeyBinding> {
        vec![
            KeyBinding { key: "↑↓", desc: "nav" },
            KeyBinding { key: "g/G", desc: "top/end" },
            KeyBinding { key: "r", desc: "refresh" },
            KeyBinding { key: "?", desc: "help" },
            KeyBinding { key: "q", desc: "quit" },
        ]
    }

    /// Get keybindings for the error view
    pub fn error_keybindings() -> Vec<KeyBinding> {
        vec![
            KeyBinding { key: "r", desc: "retry" },
            KeyBinding { key: "q", desc: "quit" },
        ]
    }

    pub fn render(frame: &mut Frame, area: Rect, view: &str) {
        // Keybindings based on view
        let keybindings = match view {
            "error" => Self::error_keybindings(),
            _ => Self::dashboard_keybindings(),
        };

        let mut spans: Vec<Span> = Vec::new();
        for kb in keybindings {
            spans.push(key_span(kb.key));
            spans.push(key_desc_span(kb.desc));
        }

        let keys_line = Line::from(spans);
        let keys_widget = Paragraph::new(keys_line)
            .style(Style::default().bg(Theme::BG_DARK))
            .alignment(Alignment::Center);
        frame.render_widget(keys_widget, area);
    }
}
