//! cinescope - movie browser for the terminal
//!
//! # Usage
//!
//! ```bash
//! # Launch interactive TUI
//! cinescope
//!
//! # CLI mode (for automation)
//! cinescope discover --genre 28 --page 2
//! cinescope search "blade runner" --json
//! cinescope trailer 78
//! ```

use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::info;

use cinescope::cli::{Cli, Command, ExitCode, Output};
use cinescope::{commands, logging, ui, App, Config, Dispatcher, Message, TmdbClient};

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.is_cli_mode() {
        logging::init_cli();
        let exit_code = run_cli(cli).await;
        std::process::exit(exit_code.into());
    } else {
        logging::init_tui();
        run_tui(cli).await
    }
}

fn load_config(cli: &Cli) -> Result<Config, cinescope::ConfigError> {
    match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Run CLI command and return exit code
async fn run_cli(cli: Cli) -> ExitCode {
    let output = Output::new(&cli);

    let client = match load_config(&cli).and_then(|c| c.tmdb_client()) {
        Ok(client) => client,
        Err(e) => return output.error(e.to_string(), ExitCode::Error),
    };

    match cli.command {
        Some(Command::Discover(cmd)) => commands::discover_cmd(cmd, &client, &output).await,
        Some(Command::Search(cmd)) => commands::search_cmd(cmd, &client, &output).await,
        Some(Command::Genres(cmd)) => commands::genres_cmd(cmd, &client, &output).await,
        Some(Command::Trailer(cmd)) => commands::trailer_cmd(cmd, &client, &output).await,
        Some(Command::Rows(cmd)) => commands::rows_cmd(cmd, &client, &output).await,
        // Handled by the is_cli_mode check
        None => ExitCode::Success,
    }
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run interactive TUI
async fn run_tui(cli: Cli) -> Result<()> {
    // Config problems are reported before the terminal is taken over
    let config = load_config(&cli)?;
    let client: TmdbClient = config.tmdb_client()?;
    let hero_interval = config.hero_interval();

    let (dispatcher, messages) = Dispatcher::new(client);
    let mut app = App::new();

    let mut terminal = init_terminal()?;
    info!("tui started");

    let result = run_event_loop(&mut terminal, &mut app, &dispatcher, messages, hero_interval).await;

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop - handles input, applies results, advances the hero, renders
async fn run_event_loop(
    terminal: &mut Tui,
    app: &mut App,
    dispatcher: &Dispatcher,
    mut messages: UnboundedReceiver<Message>,
    hero_interval: Duration,
) -> Result<()> {
    const TICK_RATE: Duration = Duration::from_millis(100);

    dispatcher.dispatch_all(app.start());
    let mut last_advance = Instant::now();

    while app.running {
        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (ignore releases on Windows)
                if key.kind == KeyEventKind::Press {
                    dispatcher.dispatch_all(app.handle_key(key));
                }
            }
        }

        while let Ok(message) = messages.try_recv() {
            dispatcher.dispatch_all(app.apply_message(message));
        }

        if last_advance.elapsed() >= hero_interval {
            app.tick();
            last_advance = Instant::now();
        }
    }

    Ok(())
}
