//! TSFORM - Terminal Signup Form
//!
//! A terminal application with a three-step signup wizard (account details,
//! personal info, review) and a paginated table of passengers fetched from
//! a remote API.

use std::io;
use std::sync::Arc;
use std::time::Duration;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::{error, info};

use tsform::application::{App, PassengerTable};
use tsform::domain::SubmissionService;
use tsform::infrastructure::{init_logging, AppConfig, HttpPassengerSource, HttpSubmission, LogSubmission};
use tsform::presentation::{render_ui, InputHandler};

/// How long the event loop waits for a key before checking for fetch results.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Entry point for the TSFORM terminal application.
///
/// Loads configuration, starts file logging, builds the collaborators,
/// then runs the event loop until the user quits.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the log file cannot be
/// opened, or terminal setup fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    let _log_guard = init_logging(&config.log_file)?;
    info!(api = %config.api_base_url, rows_per_page = config.rows_per_page, "starting tsform");

    let timeout = Duration::from_secs(config.request_timeout_secs);
    let source = Arc::new(HttpPassengerSource::new(&config.api_base_url, timeout)?);
    let submitter: Box<dyn SubmissionService> = match &config.submit_url {
        Some(url) => Box::new(HttpSubmission::new(url.clone(), timeout)?),
        None => Box::new(LogSubmission),
    };
    let table = PassengerTable::new(config.rows_per_page, config.rows_per_page_options.clone());
    let mut app = App::new(submitter, source, table);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "terminal error");
        println!("{err:?}");
    }
    info!("exiting tsform");

    Ok(())
}

/// Main application event loop.
///
/// Redraws, waits briefly for a key press, then applies any passenger
/// pages that arrived in the meantime.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    InputHandler::handle_key_event(app, key.code, key.modifiers);
                }
            }
        }
        app.poll_fetches();

        if app.should_quit {
            return Ok(());
        }
    }
}
