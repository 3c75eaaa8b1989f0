//! Clipboard adapters backed by the desktop clipboard or the terminal.

use std::io::Write;

use async_trait::async_trait;
use base64::Engine as _;

use crate::domain::ports::ClipboardPort;
use crate::error::ClientError;

/// System clipboard via `arboard`.
///
/// `arboard` is synchronous, so writes run on the blocking pool.
pub struct SystemClipboard;

#[async_trait]
impl ClipboardPort for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClientError> {
        let text = text.to_owned();

        tokio::task::spawn_blocking(move || {
            let mut clipboard =
                arboard::Clipboard::new().map_err(|e| ClientError::Clipboard(e.to_string()))?;
            clipboard
                .set_text(text)
                .map_err(|e| ClientError::Clipboard(e.to_string()))
        })
        .await
        .map_err(|e| ClientError::Clipboard(e.to_string()))?
    }
}

/// Terminal clipboard via the OSC 52 escape sequence.
///
/// Works over SSH as long as the terminal emulator honours OSC 52.
pub struct Osc52Clipboard;

impl Osc52Clipboard {
    /// Encodes `text` as an OSC 52 sequence targeting the system clipboard (`c`).
    pub fn sequence(text: &str) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(text);
        format!("\x1b]52;c;{encoded}\x1b\\")
    }
}

#[async_trait]
impl ClipboardPort for Osc52Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClientError> {
        let mut stdout = std::io::stdout();
        stdout
            .write_all(Self::sequence(text).as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| ClientError::Clipboard(format!("OSC 52 write failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_sequence() {
        assert_eq!(Osc52Clipboard::sequence("x7Kp"), "\x1b]52;c;eDdLcA==\x1b\\");
    }
}
