//! CLI - Command Line Interface for cinescope
//!
//! Every browse action of the TUI is scriptable. All output is
//! JSON-parseable.
//!
//! # Examples
//!
//! ```bash
//! # Popular movies, page 2
//! cinescope discover --page 2
//!
//! # Popular comedies
//! cinescope discover --genre 35 --json
//!
//! # Free-text search and trailer lookup
//! cinescope search "blade runner"
//! cinescope trailer 78
//! ```

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::state::MAX_PAGES;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments
    InvalidArgs = 2,
    /// Network error
    NetworkError = 3,
    /// Movie or genre not found
    NotFound = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> std::process::ExitCode {
        std::process::ExitCode::from(code as u8)
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// cinescope - movie browser for the terminal
///
/// Run without arguments to launch interactive TUI.
/// Use subcommands for scriptable automation.
#[derive(Parser, Debug)]
#[command(
    name = "cinescope",
    version,
    about = "Browse TMDB movies from the terminal",
    long_about = "A terminal movie browser: rotating featured banner, genre filters, \
                  paginated discover/search results, category rows and trailers.\n\n\
                  Run without arguments to launch the interactive TUI.\n\
                  Use subcommands for automation and scripting.",
    after_help = "EXAMPLES:\n\
                  cinescope                           Launch interactive TUI\n\
                  cinescope discover --genre 28       Popular action movies\n\
                  cinescope search \"alien\" --page 2   Search results, page 2\n\
                  cinescope trailer 348 --json        Trailer for a movie id"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Path to config file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (omit for TUI mode)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Check if running in CLI mode (has subcommand)
    pub fn is_cli_mode(&self) -> bool {
        self.command.is_some()
    }

    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Popularity-sorted movies, optionally for one genre
    #[command(visible_alias = "d")]
    Discover(DiscoverCmd),

    /// Search movies by title
    #[command(visible_alias = "s")]
    Search(SearchCmd),

    /// List movie genres
    #[command(visible_alias = "g")]
    Genres(GenresCmd),

    /// Find the trailer for a movie
    #[command(visible_alias = "t")]
    Trailer(TrailerCmd),

    /// Top movies of the leading genres
    Rows(RowsCmd),
}

/// Parse a page number within the provider's addressable range
pub fn parse_page(s: &str) -> Result<u32, String> {
    let page: u32 = s.parse().map_err(|_| format!("'{}' is not a page number", s))?;
    if (1..=MAX_PAGES).contains(&page) {
        Ok(page)
    } else {
        Err(format!("page must be between 1 and {}", MAX_PAGES))
    }
}

/// Popular movies, optionally restricted to a genre
#[derive(Args, Debug)]
pub struct DiscoverCmd {
    /// Genre id (see `cinescope genres`)
    #[arg(long, short = 'g')]
    pub genre: Option<String>,

    /// Page number
    #[arg(long, short = 'p', default_value = "1", value_parser = parse_page)]
    pub page: u32,

    /// Maximum number of results
    #[arg(long, short = 'l', default_value = "20")]
    pub limit: usize,
}

/// Search movies by free text
#[derive(Args, Debug)]
pub struct SearchCmd {
    /// Search query (title, keywords)
    #[arg(required = true)]
    pub query: String,

    /// Page number
    #[arg(long, short = 'p', default_value = "1", value_parser = parse_page)]
    pub page: u32,

    /// Maximum number of results
    #[arg(long, short = 'l', default_value = "20")]
    pub limit: usize,
}

/// List genres in provider order
#[derive(Args, Debug)]
pub struct GenresCmd {}

/// Trailer lookup for one movie
#[derive(Args, Debug)]
pub struct TrailerCmd {
    /// TMDB movie id
    #[arg(required = true)]
    pub movie_id: u64,
}

/// Category rows for the leading genres
#[derive(Args, Debug)]
pub struct RowsCmd {
    /// Maximum movies per row
    #[arg(long, short = 'l', default_value = "12")]
    pub limit: usize,
}

// =============================================================================
// JSON Output Types
// =============================================================================

/// Generic JSON output wrapper with status
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero", default)]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    /// Create success output with data
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }

    /// Create error output (no data)
    pub fn error_msg(msg: impl Into<String>, code: ExitCode) -> JsonOutput<()> {
        JsonOutput::<()> {
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

/// One page of catalog results
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogOutput {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    pub page: u32,
    /// Highest addressable page
    pub total_pages: u32,
    pub results: Vec<crate::models::Movie>,
}

/// Trailer lookup response
#[derive(Debug, Serialize, Deserialize)]
pub struct TrailerOutput {
    pub movie_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailer: Option<crate::models::Trailer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Output handler for consistent formatting
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print success data wrapped in the JSON envelope
    pub fn print<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        let output = JsonOutput::success(data);
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    /// Print a human-readable line (text mode only)
    pub fn line(&self, msg: impl std::fmt::Display) {
        if !self.json {
            println!("{}", msg);
        }
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let output = JsonOutput::<()>::error_msg(&msg, code);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet mode)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args_is_tui_mode() {
        let cli = Cli::parse_from(["cinescope"]);
        assert!(!cli.is_cli_mode());
    }

    #[test]
    fn test_parse_page_bounds() {
        assert_eq!(parse_page("1"), Ok(1));
        assert_eq!(parse_page("500"), Ok(500));
        assert!(parse_page("0").is_err());
        assert!(parse_page("501").is_err());
        assert!(parse_page("two").is_err());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::InvalidArgs), 2);
        assert_eq!(i32::from(ExitCode::NotFound), 4);
    }

    #[test]
    fn test_error_envelope_skips_data() {
        let output = JsonOutput::<()>::error_msg("boom", ExitCode::NetworkError);
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["error"], "boom");
        assert_eq!(json["exit_code"], 3);
        assert!(json.get("data").is_none());
    }
}
