//! Clipboard adapters.
//!
//! Provides three [`ClipboardPort`] implementations, selected at startup through
//! [`ClipboardBackend`]:
//! - [`SystemClipboard`] - Desktop clipboard via `arboard`
//! - [`Osc52Clipboard`] - Terminal clipboard escape sequence
//! - [`NullClipboard`] - No-op for headless sessions

mod null_clipboard;
mod system;

use std::str::FromStr;

use async_trait::async_trait;

use crate::domain::ports::ClipboardPort;
use crate::error::ClientError;

pub use null_clipboard::NullClipboard;
pub use system::{Osc52Clipboard, SystemClipboard};

/// Clipboard implementation chosen by configuration.
pub enum ClipboardBackend {
    System(SystemClipboard),
    Osc52(Osc52Clipboard),
    Null(NullClipboard),
}

impl FromStr for ClipboardBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "system" => Ok(Self::System(SystemClipboard)),
            "osc52" => Ok(Self::Osc52(Osc52Clipboard)),
            "none" => Ok(Self::Null(NullClipboard::new())),
            other => Err(format!(
                "unknown clipboard backend '{other}', expected 'system', 'osc52' or 'none'"
            )),
        }
    }
}

#[async_trait]
impl ClipboardPort for ClipboardBackend {
    async fn write_text(&self, text: &str) -> Result<(), ClientError> {
        match self {
            Self::System(clipboard) => clipboard.write_text(text).await,
            Self::Osc52(clipboard) => clipboard.write_text(text).await,
            Self::Null(clipboard) => clipboard.write_text(text).await,
        }
    }
}
