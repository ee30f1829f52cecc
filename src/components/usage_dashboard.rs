use chrono::{DateTime, Local, Utc};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::ui::{split_pane, Theme};
use crate::usage::AppSummary;

use super::totals_cards::format_count;

const BAR_WIDTH: usize = 10;

/// App usage dashboard state: sorted app list plus feature detail pane
pub struct UsageDashboard {
    pub summaries: Vec<AppSummary>,
    pub selected_index: usize,
    pub selected_name: Option<String>,
    pub state: ListState,
}

impl UsageDashboard {
    pub fn new() -> Self {
        let mut state = ListState::default();
        state.select(Some(0));
        Self {
            summaries: Vec::new(),
            selected_index: 0,
            selected_name: None,
            state,
        }
    }

    /// Replace the summary list wholesale, keeping the selection anchored
    /// to the same app name where possible.
    pub fn update_summaries(&mut self, summaries: Vec<AppSummary>) {
        let new_index = self
            .selected_name
            .as_ref()
            .and_then(|name| summaries.iter().position(|s| &s.name == name))
            .unwrap_or(0);

        self.summaries = summaries;
        self.selected_index = new_index;
        self.state.select(Some(new_index));
        self.update_selection();
    }

    pub fn selected_app(&self) -> Option<&AppSummary> {
        self.summaries.get(self.selected_index)
    }

    pub fn select_next(&mut self) {
        if !self.summaries.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.summaries.len();
            self.state.select(Some(self.selected_index));
            self.update_selection();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.summaries.is_empty() {
            self.selected_index = if self.selected_index == 0 {
                self.summaries.len() - 1
            } else {
                self.selected_index - 1
            };
            self.state.select(Some(self.selected_index));
            self.update_selection();
        }
    }

    pub fn select_top(&mut self) {
        if !self.summaries.is_empty() {
            self.selected_index = 0;
            self.state.select(Some(0));
            self.update_selection();
        }
    }

    pub fn select_bottom(&mut self) {
        if !self.summaries.is_empty() {
            self.selected_index = self.summaries.len() - 1;
            self.state.select(Some(self.selected_index));
            self.update_selection();
        }
    }

    fn update_selection(&mut self) {
        if let Some(s) = self.summaries.get(self.selected_index) {
            self.selected_name = Some(s.name.clone());
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (list_area, detail_area) = split_pane(area);

        self.render_app_list(frame, list_area);
        self.render_app_details(frame, detail_area);
    }

    fn render_app_list(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Theme::BORDER))
            .title(Span::styled(
                format!(" {} apps ", self.summaries.len()),
                Style::default().fg(Theme::MAUVE).add_modifier(Modifier::BOLD),
            ));

        let max_count = self
            .summaries
            .iter()
            .map(|s| s.total_count)
            .max()
            .unwrap_or(0);

        let items: Vec<ListItem> = self
            .summaries
            .iter()
            .enumerate()
            .map(|(i, app)| {
                let is_selected = i == self.selected_index;

                let features_str = if app.features.is_empty() {
                    String::new()
                } else {
                    format!("{} ftr", app.features.len())
                };

                let content = format!(
                    " {:>2} {:<18} {:>9} {} {:>6}",
                    i + 1,
                    truncate_name(&app.name, 18),
                    format_count(app.total_count),
                    share_bar(app.total_count, max_count),
                    features_str,
                );

                let style = if is_selected {
                    Style::default().bg(Theme::BG_HIGHLIGHT).fg(Theme::FG)
                } else if i == 0 {
                    Style::default().fg(Theme::GREEN).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Theme::FG_DARK)
                };

                ListItem::new(Line::from(Span::styled(content, style)))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state);
    }

    fn render_app_details(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Theme::BORDER))
            .title(Span::styled(
                " App Details ",
                Style::default().fg(Theme::MAUVE).add_modifier(Modifier::BOLD),
            ));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(app) = self.selected_app() else {
            let msg = Paragraph::new("No usage data")
                .style(Style::default().fg(Theme::FG_DARK));
            frame.render_widget(msg, inner);
            return;
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled(&app.name, Style::default().fg(Theme::LAVENDER).add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled(
                    format!("{} uses", format_count(app.total_count)),
                    Style::default().fg(Theme::MAUVE),
                ),
            ]),
            Line::raw(""),
            Line::from(vec![
                Span::styled("First: ", Style::default().fg(Theme::FG_DARK)),
                Span::styled(format_visit(app.first_visit), Style::default().fg(Theme::FG)),
            ]),
            Line::from(vec![
                Span::styled("Last:  ", Style::default().fg(Theme::FG_DARK)),
                Span::styled(format_visit(app.last_visit), Style::default().fg(Theme::FG)),
                Span::raw("  "),
                Span::styled(
                    format!("({})", format_relative_time(app.last_visit)),
                    Style::default().fg(Theme::FG_DARK),
                ),
            ]),
            Line::raw(""),
        ];

        if app.features.is_empty() {
            lines.push(Line::from(Span::styled(
                "(no feature records)",
                Style::default().fg(Theme::FG_DARK),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                format!("Features ({})", app.features.len()),
                Style::default().fg(Theme::FG_DARK),
            )));
            for feature in &app.features {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {:<20}", truncate_name(&feature.name, 20)),
                        Style::default().fg(Theme::CYAN),
                    ),
                    Span::styled(
                        format!("{:>7}", format_count(feature.count)),
                        Style::default().fg(Theme::PEACH),
                    ),
                    Span::styled(
                        format!(
                            "  {} → {}",
                            format_visit_short(feature.first_visit),
                            format_visit_short(feature.last_visit)
                        ),
                        Style::default().fg(Theme::FG_DARK),
                    ),
                ]));
            }
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

impl Default for UsageDashboard {
    fn default() -> Self {
        Self::new()
    }
}

// Helper functions

fn format_visit(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

fn format_visit_short(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%m-%d %H:%M").to_string()
}

fn format_relative_time(ts: DateTime<Utc>) -> String {
    let minutes_ago = Utc::now().signed_duration_since(ts).num_minutes().max(0) as f64;

    if minutes_ago < 1.0 {
        "now".to_string()
    } else if minutes_ago < 60.0 {
        format!("{}m ago", minutes_ago as u64)
    } else if minutes_ago < 24.0 * 60.0 {
        format!("{}h ago", (minutes_ago / 60.0).floor() as u64)
    } else {
        format!("{}d ago", (minutes_ago / (24.0 * 60.0)).floor() as u64)
    }
}

/// Fixed-width usage share bar, filled proportionally to the top app
fn share_bar(count: u64, max_count: u64) -> String {
    let filled = if max_count == 0 {
        0
    } else {
        ((count as f64 / max_count as f64) * BAR_WIDTH as f64).round() as usize
    };
    let filled = filled.min(BAR_WIDTH);

    let mut bar = String::with_capacity(BAR_WIDTH * 3);
    for _ in 0..filled {
        bar.push('▰');
    }
    for _ in filled..BAR_WIDTH {
        bar.push('▱');
    }
    bar
}

fn truncate_name(name: &str, max_len: usize) -> String {
    if name.chars().count() <= max_len {
        name.to_string()
    } else {
        let truncated: String = name.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usage::models::parse_visit_time;

    fn summary(name: &str, total: u64) -> AppSummary {
        AppSummary {
            name: name.to_string(),
            total_count: total,
            first_visit: parse_visit_time("2024-01-01").unwrap(),
            last_visit: parse_visit_time("2024-01-02").unwrap(),
            features: Vec::new(),
        }
    }

    #[test]
    fn test_selection_reanchors_by_name() {
        let mut dash = UsageDashboard::new();
        dash.update_summaries(vec![summary("a", 10), summary("b", 5)]);
        dash.select_next();
        assert_eq!(dash.selected_app().unwrap().name, "b");

        // After a refresh reorders the list, selection follows the name
        dash.update_summaries(vec![summary("b", 50), summary("a", 10)]);
        assert_eq!(dash.selected_app().unwrap().name, "b");
        assert_eq!(dash.selected_index, 0);
    }

    #[test]
    fn test_selection_falls_back_when_app_disappears() {
        let mut dash = UsageDashboard::new();
        dash.update_summaries(vec![summary("a", 10), summary("b", 5)]);
        dash.select_next();

        dash.update_summaries(vec![summary("a", 10)]);
        assert_eq!(dash.selected_index, 0);
        assert_eq!(dash.selected_app().unwrap().name, "a");
    }

    #[test]
    fn test_navigation_wraps() {
        let mut dash = UsageDashboard::new();
        dash.update_summaries(vec![summary("a", 10), summary("b", 5)]);

        dash.select_prev();
        assert_eq!(dash.selected_index, 1);
        dash.select_next();
        assert_eq!(dash.selected_index, 0);
    }

    #[test]
    fn test_share_bar_bounds() {
        assert_eq!(share_bar(0, 0), "▱".repeat(BAR_WIDTH));
        assert_eq!(share_bar(100, 100), "▰".repeat(BAR_WIDTH));
        assert_eq!(share_bar(0, 100), "▱".repeat(BAR_WIDTH));
    }
}
