//! Clipboard access behind a trait so the TUI can be driven by a fake in tests.

/// Error writing to the clipboard.
#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(#[from] arboard::Error),
}

/// Write-only clipboard. Implementations may block; callers run them off the UI thread.
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), CopyError>;
}

/// System clipboard via arboard. A fresh handle is opened per write.
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), CopyError> {
        arboard::Clipboard::new()
            .and_then(|mut c| c.set_text(text.to_string()))
            .map_err(CopyError::from)
    }
}
