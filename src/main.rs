//! TSENT - Terminal Sentiment Client
//!
//! Submits free-form text to a remote classification endpoint and shows
//! whether the server judged it positive or negative.

use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use tsent::application::{App, RequestController};
use tsent::domain::{CONNECTION_ERROR_MESSAGE, SubmissionPhase};
use tsent::infrastructure::{logging, Cli, ClientConfig, HttpClassifier};
use tsent::presentation::{describe, render_ui, InputHandler};

/// How often the event loop wakes to pick up finished requests.
const TICK: Duration = Duration::from_millis(100);

/// Extra time the one-shot mode waits beyond the HTTP timeout.
const HEADLESS_GRACE: Duration = Duration::from_secs(5);

/// Entry point for the TSENT terminal client.
///
/// Parses flags, sets up file logging, and runs either the interactive
/// terminal UI or the one-shot `--text` mode.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_dir = cli.resolve_log_dir();
    if let Err(err) = logging::init(&log_dir) {
        eprintln!("tsent: logging disabled: {err}");
    }

    let config = ClientConfig::from(&cli);
    let classifier = match HttpClassifier::new(&config) {
        Ok(classifier) => classifier,
        Err(err) => {
            tracing::error!(error = %err, "failed to build HTTP client");
            eprintln!("tsent: {err}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(url = classifier.url(), timeout_secs = config.timeout.as_secs(), "classifier configured");
    let controller = RequestController::new(Arc::new(classifier));

    match cli.text {
        Some(text) => run_headless(controller, &text, config.timeout + HEADLESS_GRACE),
        None => match run_tui(App::new(controller, config.predict_url())) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                tracing::error!(error = %err, "terminal UI failed");
                eprintln!("{err:?}");
                ExitCode::FAILURE
            }
        },
    }
}

/// Classifies `text` once and prints the verdict.
fn run_headless(mut controller: RequestController, text: &str, wait: Duration) -> ExitCode {
    controller.set_draft(text);
    if let Err(reason) = controller.submit() {
        eprintln!("tsent: {reason}");
        return ExitCode::from(2);
    }
    if !controller.wait(wait) {
        tracing::warn!("no response within {:?}", wait);
        eprintln!("{CONNECTION_ERROR_MESSAGE}");
        return ExitCode::FAILURE;
    }

    match controller.phase() {
        SubmissionPhase::Succeeded(result) => {
            println!("{}", describe(result));
            ExitCode::SUCCESS
        }
        SubmissionPhase::Failed(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
        SubmissionPhase::Idle | SubmissionPhase::Pending(_) => ExitCode::FAILURE,
    }
}

fn run_tui(mut app: App) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(Into::into)
}

/// Main application event loop.
///
/// Redraws, waits up to one tick for a key, then folds in any finished
/// request, so the UI stays responsive while a call is in flight.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    InputHandler::handle_key_event(app, key.code, key.modifiers);
                }
            }
        }
        app.tick();

        if app.should_quit {
            return Ok(());
        }
    }
}
