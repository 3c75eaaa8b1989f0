//! Text rendering of controller snapshots.

use std::fmt::Write as _;

use colored::Colorize;

use crate::application::services::{ClipboardSnapshot, ListSnapshot};
use crate::domain::entities::BaseAddress;

const FULL_URL_WIDTH: usize = 48;

/// Renders the list table and the pagination bar.
pub fn render_list(snapshot: &ListSnapshot, base: &BaseAddress) -> String {
    if snapshot.is_loading() {
        return format!("{}\n", "Loading...".yellow());
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        format!(
            "{:>3}  {:<width$}  {:<32}  {:>6}",
            "#",
            "Full URL",
            "Short URL",
            "Clicks",
            width = FULL_URL_WIDTH
        )
        .bold()
    );

    if snapshot.entries().is_empty() {
        let _ = writeln!(out, "{}", "  (no short URLs on this page)".dimmed());
    }

    for (index, entry) in snapshot.entries().iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}  {:<width$}  {}  {:>6}",
            index + 1,
            truncate(&entry.full_url, FULL_URL_WIDTH),
            format!("{:<32}", base.redirect_url(&entry.short_code)).cyan(),
            entry.clicks,
            width = FULL_URL_WIDTH
        );
    }

    let previous = if snapshot.has_previous() {
        "< Previous".normal()
    } else {
        "< Previous".dimmed()
    };
    let next = if snapshot.has_next() {
        "Next >".normal()
    } else {
        "Next >".dimmed()
    };

    let _ = writeln!(
        out,
        "{}   page {}   {}   limit {}",
        previous,
        snapshot.page().to_string().bold(),
        next,
        snapshot.limit()
    );

    out
}

/// Renders the copied entry, its redirect link and, once revealed, the long URL.
pub fn render_clipboard(snapshot: &ClipboardSnapshot, base: &BaseAddress) -> String {
    let Some(selected) = &snapshot.selected else {
        return format!("{}\n", "Nothing copied yet".dimmed());
    };

    let mut out = format!(
        "Copied URL: {}  ({})\n",
        selected.short_code.green().bold(),
        base.redirect_url(&selected.short_code)
    );

    if let Some(full_url) = snapshot.revealed_full_url() {
        let _ = writeln!(out, "Full URL:   {full_url}");
    }

    out
}

/// Shortens `text` to `width` characters, marking the cut with an ellipsis.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{kept}…")
}
