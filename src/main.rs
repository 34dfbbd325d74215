mod app;
mod config;
mod error;
mod events;
mod icons;
mod log;
mod picker;
mod scroll;
mod tui;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;

use app::App;
use config::{Config, Overrides};
use error::IconPickError;
use events::EventHandler;
use picker::CellMetrics;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
    }
    log::install_panic_hook();

    // CLI > env var > config file > defaults
    let overrides = Overrides::parse(std::env::args().skip(1))?;
    let config = match &overrides.config_path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .with_overrides(&overrides);
    log::log(&format!("Config: {:?}", config));

    let layout = config.layout()?;
    let catalog = config.catalog()?;
    if catalog.is_empty() {
        log::log("Catalog is empty, the picker will show a single empty page");
    }
    let cell_metrics = match config.cell_metrics(&overrides)? {
        Some(metrics) => metrics,
        None => detect_cell_metrics(),
    };
    log::log(&format!(
        "Layout: {:?}, {} icons, cell metrics {:?}",
        layout,
        catalog.len(),
        cell_metrics
    ));

    // Setup terminal
    let mut terminal = setup_terminal()?;

    let mut app = App::new(catalog, layout, cell_metrics);

    // Run the app
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal even when the loop failed
    restore_terminal(&mut terminal)?;

    result?;

    if let Some(icon) = app.selected_icon() {
        println!("{}", icon);
    }
    log::log("=== iconpick exited ===");

    Ok(())
}

/// Cell size reported by the terminal, or a typical 8x16 fallback.
fn detect_cell_metrics() -> CellMetrics {
    match crossterm::terminal::window_size() {
        Ok(size) => CellMetrics::from_window(size.columns, size.rows, size.width, size.height)
            .unwrap_or_default(),
        Err(e) => {
            log::log(&format!("Terminal did not report its size: {}", e));
            CellMetrics::default()
        }
    }
}

fn setup_terminal() -> error::Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(|e| IconPickError::Terminal(e.to_string()))
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> error::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    loop {
        // Render
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        if app.should_quit {
            return Ok(());
        }

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        let action = EventHandler::handle_event(app, &event);
                        app.dispatch(action);
                    }
                    Some(Err(e)) => {
                        return Err(e).context("failed to read terminal event");
                    }
                    None => return Ok(()),
                }
            }

            // Idle wakeup keeps resize redraws prompt
            _ = tokio::time::sleep(Duration::from_millis(250)) => {}
        }
    }
}
