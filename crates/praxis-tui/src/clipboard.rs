//! Clipboard access for copying assistant replies.

/// Clipboard operation errors.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// The system clipboard could not be opened or written.
    #[error("system clipboard failed: {0}")]
    System(String),
}

/// Somewhere copied text can go.
pub trait Clipboard: std::fmt::Debug {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The operating system clipboard, via `arboard`.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::System(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::System(e.to_string()))
    }
}

/// In-memory clipboard for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: std::rc::Rc<std::cell::RefCell<Option<String>>>,
    pub fail: bool,
}

#[cfg(test)]
impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::System("unavailable".to_string()));
        }
        *self.contents.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}
