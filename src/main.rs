//! FormDeck TUI - Terminal User Interface for FormDeck form pages
//!
//! A Ratatui-based client that renders declarative form pages and
//! enforces the global interaction guards: double-submit prevention,
//! navigation-chord suppression, context-menu suppression, and
//! checkbox-group widgets.

mod app;
mod behavior;
mod config;
mod host;
mod page;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use host::RecordingHost;
use page::PageStore;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "formdeck_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Load config and page definitions
    let config = TuiConfig::load().unwrap_or_default();
    let store = match config.pages_dir.as_deref() {
        Some(dir) => PageStore::load_dir(Path::new(dir)),
        None => PageStore::builtin(),
    };
    let start_page = config.start_page.as_deref().unwrap_or("demo");
    let mouse_capture = config.mouse_capture.unwrap_or(true);
    tracing::debug!("page store ready: {:?}", store.names());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if mouse_capture {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(store, Box::new(RecordingHost::new()), start_page)?;
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    if mouse_capture {
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Keep the hit-testing layout in sync with what gets drawn
        let term_size = terminal.size()?;
        app.terminal_size = Some((term_size.height, term_size.width));

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle crossterm events
        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }

                    app.handle_key(key).await?;
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse(mouse).await?;
                }
                Event::Resize(_width, _height) => {
                    // Slots are recomputed from the new size on next draw
                }
                _ => {}
            }
        }

        // The zero-delay tick: run work queued during the event, after
        // the event itself has fully completed
        app.drain_deferred();

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
