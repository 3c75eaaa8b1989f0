//! Terminal front end driving the controllers.
//!
//! - [`command`] - Parsing of console lines
//! - [`render`] - Text rendering of snapshots
//!
//! The interactive console starts the list observer loop, redraws the table whenever a
//! page lands and maps one line of input to one controller operation.

pub mod command;
pub mod render;

use anyhow::Result;
use chrono::{DateTime, Utc};
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;

use crate::application::services::ListSnapshot;
use crate::domain::entities::PageQuery;
use crate::error::ClientError;
use crate::state::{AppState, ListController};
use command::{ConsoleCommand, parse_line};
use render::{render_clipboard, render_list};

/// What the loop should do after a command.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Runs the interactive console until `quit`, end of input or Ctrl-C.
///
/// # Errors
///
/// Returns an error if reading stdin fails.
pub async fn run(app: AppState) -> Result<()> {
    let observer = tokio::spawn(app.list.clone().run(app.refresh_interval));
    let renderer = spawn_renderer(&app);

    println!(
        "{} Type {} for the list of commands.",
        "url-shrinker".bold(),
        "help".cyan()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => None,
        };

        let Some(line) = line else { break };
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(&line) {
            Ok(command) => {
                if dispatch(&app, command).await == Flow::Quit {
                    break;
                }
            }
            Err(e) => {
                let _ = e.print();
            }
        }
    }

    app.list.dispose();
    renderer.abort();
    let _ = observer.await;

    Ok(())
}

/// What the table shows; the renderer redraws when it changes.
type RedrawKey = (bool, Option<DateTime<Utc>>, PageQuery);

fn redraw_key(snapshot: &ListSnapshot) -> RedrawKey {
    (
        snapshot.is_loading(),
        snapshot.refreshed_at(),
        snapshot.query(),
    )
}

/// Prints the table whenever a page lands, loading starts or the cursor moves.
fn spawn_renderer(app: &AppState) -> JoinHandle<()> {
    let mut updates = app.list.subscribe();
    let base = app.base.clone();

    tokio::spawn(async move {
        let mut last = None;
        while updates.changed().await.is_ok() {
            let (key, text) = {
                let snapshot = updates.borrow_and_update();
                (redraw_key(&snapshot), render_list(&snapshot, &base))
            };
            if last != Some(key) {
                print!("{text}");
                last = Some(key);
            }
        }
    })
}

/// Submitting and paging wait for the pending request, like disabled controls.
fn blocked_by_loading(command: &ConsoleCommand, loading: bool) -> bool {
    loading
        && matches!(
            command,
            ConsoleCommand::Shorten { .. }
                | ConsoleCommand::Next
                | ConsoleCommand::Previous
                | ConsoleCommand::Page { .. }
                | ConsoleCommand::Limit { .. }
        )
}

async fn dispatch(app: &AppState, command: ConsoleCommand) -> Flow {
    if blocked_by_loading(&command, app.list.snapshot().is_loading()) {
        println!("{}", "Still loading, try again in a moment".dimmed());
        return Flow::Continue;
    }

    match command {
        ConsoleCommand::Refresh => {
            report(app.list.refresh().await);
        }
        ConsoleCommand::Next => {
            if !app.list.next_page() {
                println!("{}", "Already on the last page".dimmed());
            }
        }
        ConsoleCommand::Previous => {
            if !app.list.previous_page() {
                println!("{}", "Already on the first page".dimmed());
            }
        }
        ConsoleCommand::Page { number } => {
            app.list.set_page(number);
        }
        ConsoleCommand::Limit { size } => {
            if let Err(e) = app.list.set_limit(size) {
                println!("{}", e.to_string().red());
            }
        }
        ConsoleCommand::Shorten { url, length } => {
            shorten(&app.list, url, length).await;
        }
        ConsoleCommand::Copy { row } => {
            let entry = row
                .checked_sub(1)
                .and_then(|index| app.list.snapshot().entries().get(index).cloned());
            match entry {
                Some(entry) => {
                    app.clipboard.copy(&entry.short_code, &entry.full_url).await;
                    print!("{}", render_clipboard(&app.clipboard.snapshot(), &app.base));
                }
                None => println!("{}", format!("No row {row} on this page").red()),
            }
        }
        ConsoleCommand::Reveal => {
            if app.clipboard.reveal() {
                print!("{}", render_clipboard(&app.clipboard.snapshot(), &app.base));
            } else {
                println!("{}", "Copy a row first".dimmed());
            }
        }
        ConsoleCommand::Redirect => match app.clipboard.redirect_selected() {
            Ok(url) => println!("Opened {}", url.cyan()),
            Err(ClientError::NothingSelected) => println!("{}", "Copy a row first".dimmed()),
            Err(e) => println!("{}", e.to_string().red()),
        },
        ConsoleCommand::Quit => return Flow::Quit,
    }

    Flow::Continue
}

async fn shorten(list: &ListController, url: String, length: Option<u32>) {
    let length = length.unwrap_or_else(|| list.snapshot().draft().url_length);
    match list.create(url, length).await {
        Ok(()) => println!("{}", "Short URL created".green()),
        Err(e) => println!("{}", e.to_string().red()),
    }
}

fn report(result: Result<(), ClientError>) {
    if let Err(e) = result {
        println!("{}", e.to_string().red());
    }
}

/// Fetches one page and prints it.
///
/// # Errors
///
/// Returns the gateway error if the page cannot be fetched.
pub async fn list_once(app: &AppState) -> Result<()> {
    app.list.refresh().await?;
    print!("{}", render_list(&app.list.snapshot(), &app.base));
    Ok(())
}

/// Creates one short URL, then prints the refreshed first page.
///
/// # Errors
///
/// Returns the validation or gateway error if the create fails.
pub async fn shorten_once(app: &AppState, url: String, length: Option<u32>) -> Result<()> {
    let length = length.unwrap_or_else(|| app.list.snapshot().draft().url_length);
    app.list.create(url, length).await?;
    println!("{}", "Short URL created".green());
    print!("{}", render_list(&app.list.snapshot(), &app.base));
    Ok(())
}
