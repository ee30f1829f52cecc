use std::fs;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use tracing_subscriber::EnvFilter;

use visits_tui::action::Action;
use visits_tui::app::{App, ModalState};
use visits_tui::config::Config;
use visits_tui::tui;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = Config::load_or_default()?;

    // Initialize terminal
    let mut terminal = tui::init()?;

    // Create app and run the first fetch cycle before the loop
    let mut app = App::new(&config)?;
    app.refresh().await?;

    // Main event loop
    let tick_rate = Duration::from_millis(250);

    loop {
        // Render
        terminal.draw(|frame| app.render(frame))?;

        // Handle events with timeout for tick
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                let action = handle_key_event(&app, key);
                app.handle_action(action).await?;
            }
        } else {
            // Tick for the poll cycle
            app.handle_action(Action::Tick).await?;
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    tui::restore()?;

    Ok(())
}

/// Convert key events to actions based on current state
fn handle_key_event(app: &App, key: event::KeyEvent) -> Action {
    // Handle modal keys first
    if app.modal != ModalState::None {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::CloseModal,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('?') => Action::ShowHelp,

        KeyCode::Char('j') | KeyCode::Down => Action::Down,
        KeyCode::Char('k') | KeyCode::Up => Action::Up,
        KeyCode::Char('g') => Action::Top,
        KeyCode::Char('G') => Action::Bottom,

        KeyCode::Char('r') => Action::Refresh,

        _ => Action::None,
    }
}

/// Route tracing to a log file when RUST_LOG is set (stdout belongs to the TUI)
fn init_logging() {
    if std::env::var("RUST_LOG").is_err() {
        return;
    }

    let Some(log_dir) = Config::config_dir() else {
        return;
    };

    if fs::create_dir_all(&log_dir).is_err() {
        return;
    }

    if let Ok(file) = fs::File::create(log_dir.join("visits-tui.log")) {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .try_init();
    }
}
