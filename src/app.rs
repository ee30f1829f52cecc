use anyhow::Result;
use chrono::{DateTime, Local};
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::action::Action;
use crate::components::{ErrorView, Header, HelpModal, StatusBar, TotalsCards, UsageDashboard};
use crate::config::Config;
use crate::ui::layout::main_layout;
use crate::ui::Theme;
use crate::usage::{aggregate_records, DashboardTotals, UsageFeed};

/// Active modal state
#[derive(Debug, Clone, PartialEq)]
pub enum ModalState {
    None,
    Help,
}

/// Main application state
pub struct App {
    // Usage feed
    feed: UsageFeed,

    // View state
    pub modal: ModalState,
    pub should_quit: bool,
    pub loading: bool,

    // Current snapshot (replaced wholesale on each successful cycle)
    pub totals: DashboardTotals,
    pub last_update: Option<DateTime<Local>>,

    // Fetch failure; auto-refresh is paused while set
    pub error: Option<String>,

    // Components
    pub dashboard: UsageDashboard,

    // Refresh timing
    last_refresh: Instant,
    poll_interval: Duration,
    poll_interval_secs: u64,
}

impl App {
    pub fn new(config: &Config) -> Result<Self> {
        let feed = UsageFeed::new(&config.endpoint, config.request_timeout())?;

        Ok(Self {
            feed,
            modal: ModalState::None,
            should_quit: false,
            loading: false,
            totals: DashboardTotals::default(),
            last_update: None,
            error: None,
            dashboard: UsageDashboard::new(),
            // Force an immediate first refresh
            last_refresh: Instant::now() - config.poll_interval(),
            poll_interval: config.poll_interval(),
            poll_interval_secs: config.poll_interval_secs,
        })
    }

    /// Whether the poll interval has elapsed since the last cycle
    pub fn should_refresh(&self) -> bool {
        self.last_refresh.elapsed() >= self.poll_interval
    }

    /// One fetch-and-aggregate cycle.
    ///
    /// Awaited inline from the event loop, so cycles never overlap. On
    /// failure the previous snapshot stays visible and automatic polling
    /// pauses until a manual retry succeeds.
    pub async fn refresh(&mut self) -> Result<()> {
        self.loading = true;
        self.last_refresh = Instant::now();

        match self.feed.fetch().await {
            Ok(records) => {
                let summaries = aggregate_records(&records);
                self.totals = DashboardTotals::compute(&summaries);
                self.dashboard.update_summaries(summaries);
                self.last_update = Some(Local::now());
                self.error = None;
                info!(
                    apps = self.totals.apps,
                    total_uses = self.totals.total_uses,
                    "refreshed usage snapshot"
                );
            }
            Err(e) => {
                warn!(endpoint = self.feed.endpoint(), error = %e, "fetch cycle failed");
                self.error = Some(e.to_string());
            }
        }

        self.loading = false;
        Ok(())
    }

    pub async fn tick(&mut self) -> Result<()> {
        // Polling halts after a failure; only a manual retry resumes it
        if self.error.is_some() {
            return Ok(());
        }

        if self.should_refresh() {
            self.refresh().await?;
        }

        Ok(())
    }

    pub async fn handle_action(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Quit => {
                self.should_quit = true;
            }

            Action::Up => self.dashboard.select_prev(),
            Action::Down => self.dashboard.select_next(),
            Action::Top => self.dashboard.select_top(),
            Action::Bottom => self.dashboard.select_bottom(),

            Action::ShowHelp => {
                self.modal = ModalState::Help;
            }

            Action::CloseModal => {
                self.modal = ModalState::None;
            }

            Action::Refresh => {
                self.refresh().await?;
            }

            Action::Tick => {
                self.tick().await?;
            }

            Action::None => {}
        }

        Ok(())
    }

    pub fn render(&mut self, frame: &mut ratatui::Frame) {
        // Set background color
        let bg_block = ratatui::widgets::Block::default()
            .style(ratatui::prelude::Style::default().bg(Theme::BG));
        frame.render_widget(bg_block, frame.area());

        let (header_area, cards_area, body, footer) = main_layout(frame.area());

        Header::render(
            frame,
            header_area,
            self.last_update,
            self.poll_interval_secs,
            self.loading,
            self.error.is_some(),
        );

        TotalsCards::render(frame, cards_area, &self.totals);

        self.dashboard.render(frame, body);

        let view_str = if self.error.is_some() {
            "error"
        } else {
            "dashboard"
        };
        StatusBar::render(frame, footer, view_str);

        // Error panel over the body (stale snapshot stays underneath)
        if let Some(ref message) = self.error {
            ErrorView::render(frame, body, message, !self.dashboard.summaries.is_empty());
        }

        // Modals (rendered last, on top)
        if self.modal == ModalState::Help {
            HelpModal::render(frame, frame.area());
        }
    }
}
