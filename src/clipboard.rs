//! Clipboard access behind a small trait so the UI can be tested without
//! a display server.

use tracing::debug;

use crate::error::{Error, Result};

/// Anything that can receive copied text.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    ///
    /// # Errors
    /// [`Error::ClipboardUnavailable`] if the write fails.
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard via arboard.
///
/// Opened lazily on first copy and kept for the session: on X11 the
/// contents only live as long as the owning handle.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.inner.is_none() {
            let handle = arboard::Clipboard::new()
                .map_err(|e| Error::ClipboardUnavailable(e.to_string()))?;
            self.inner = Some(handle);
        }
        let Some(clipboard) = self.inner.as_mut() else {
            return Err(Error::ClipboardUnavailable("clipboard not initialized".into()));
        };
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| Error::ClipboardUnavailable(e.to_string()))?;
        debug!(chars = text.chars().count(), "copied to clipboard");
        Ok(())
    }
}

/// In-memory clipboard for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    pub fail: bool,
}

#[cfg(test)]
impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.fail {
            return Err(Error::ClipboardUnavailable("permission denied".into()));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clipboard_stores_text() {
        let mut clipboard = MemoryClipboard::default();
        clipboard.set_text("gm").unwrap();
        assert_eq!(clipboard.contents.as_deref(), Some("gm"));
    }

    #[test]
    fn memory_clipboard_failure_is_clipboard_unavailable() {
        let mut clipboard = MemoryClipboard { fail: true, ..Default::default() };
        let err = clipboard.set_text("gm").unwrap_err();
        assert!(matches!(err, Error::ClipboardUnavailable(_)));
        assert!(clipboard.contents.is_none());
    }
}
