//! Onboard TUI - a terminal onboarding form
//!
//! Collects a name, email and password plus a terms checkbox, validates the
//! required fields and posts the values as JSON on submit.
//!
//! Logs are written to `onboard-tui.log` in the local data directory so they
//! never draw over the form.

mod app;
mod config;
mod state;
mod submit;
mod ui;

use anyhow::Result;
use app::App;
use config::OnboardConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use submit::HttpSubmitter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Log file name inside the log directory
const LOG_FILE: &str = "onboard-tui.log";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging; the guard flushes the file on exit
    let (log_writer, _log_guard) = log_writer();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "onboard_tui=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(log_writer),
        )
        .init();

    let config = OnboardConfig::load()?;
    let submitter = HttpSubmitter::new(config.resolve_endpoint());
    tracing::info!("Submitting to {}", submitter.endpoint());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(Arc::new(submitter));
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// File writer for the log; logs are dropped when no log file can be opened
fn log_writer() -> (BoxMakeWriter, Option<WorkerGuard>) {
    let appender = OnboardConfig::log_dir().and_then(|dir| {
        std::fs::create_dir_all(&dir).ok()?;
        RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix(LOG_FILE)
            .build(dir)
            .ok()
    });

    match appender {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(writer), Some(guard))
        }
        None => (BoxMakeWriter::new(io::sink), None),
    }
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Submissions run on worker threads, so polling here never stalls them
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Ignore release/repeat events reported on some platforms
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Ok(());
                }

                app.handle_key(key)?;
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
