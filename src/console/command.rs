//! Commands accepted by the interactive console.

use clap::{Parser, Subcommand};

/// One console line. The first word names the command.
#[derive(Debug, Parser)]
#[command(multicall = true)]
struct ConsoleLine {
    #[command(subcommand)]
    command: ConsoleCommand,
}

/// Interactive console commands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum ConsoleCommand {
    /// Re-fetch the current page
    #[command(alias = "r")]
    Refresh,

    /// Go to the next page
    #[command(alias = "n")]
    Next,

    /// Go to the previous page
    #[command(alias = "prev", alias = "p")]
    Previous,

    /// Jump to a page
    Page {
        /// Page number, starting at 1
        number: u32,
    },

    /// Change the page size (returns to page 1)
    Limit {
        /// Entries per page, e.g. 5, 10 or 20
        size: u32,
    },

    /// Shorten a URL
    Shorten {
        /// URL to shorten, with or without http(s)://
        url: String,

        /// Desired short code length (at least 4)
        #[arg(short, long)]
        length: Option<u32>,
    },

    /// Copy the short code of a row to the clipboard
    #[command(alias = "c")]
    Copy {
        /// Row number as shown in the table
        row: usize,
    },

    /// Show the long URL of the copied entry
    Reveal,

    /// Open the copied short URL in the browser
    #[command(alias = "open")]
    Redirect,

    /// Leave the console
    #[command(alias = "exit", alias = "q")]
    Quit,
}

/// Parses a console line.
///
/// # Errors
///
/// Returns the clap error for unknown commands or bad arguments, and for `help`, whose
/// rendered text is carried in the error.
pub fn parse_line(line: &str) -> Result<ConsoleCommand, clap::Error> {
    ConsoleLine::try_parse_from(line.split_whitespace()).map(|line| line.command)
}
