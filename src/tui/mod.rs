//! Terminal UI for Timeline Tic-Tac-Toe

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::cell::Cell;
use std::io::{self, Stdout};
use std::rc::Rc;
use std::time::Duration;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

use app::{App, KeyOutcome};
use timeline_tictactoe::{GameState, Session, Settings};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Run the interactive terminal UI until the user quits.
pub fn run_tui(settings: &Settings) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(settings.log_file())
        .with_context(|| format!("Failed to create log file {}", settings.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting Timeline Tic-Tac-Toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let app = App::new(Session::new(GameState::with_order(*settings.ascending())));
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "UI loop error");
    }
    info!("TUI exited");
    res
}

/// Event loop: redraw whenever the session or the local view changed.
#[instrument(skip_all)]
fn run_app(terminal: &mut Term, mut app: App) -> Result<()> {
    let redraw = Rc::new(Cell::new(true));
    {
        let redraw = Rc::clone(&redraw);
        app.session_mut().subscribe(move |_| redraw.set(true));
    }

    loop {
        if redraw.replace(false) {
            terminal.draw(|f| ui::draw(f, &app))?;
        }

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match app.handle_key(key.code) {
                KeyOutcome::Quit => {
                    info!("User quit");
                    return Ok(());
                }
                KeyOutcome::Redraw => redraw.set(true),
                KeyOutcome::Ignored => {}
            },
            Event::Resize(..) => redraw.set(true),
            _ => {}
        }
    }
}
