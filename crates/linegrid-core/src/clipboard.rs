//! Clipboard abstraction layer.
//!
//! The editor hands serialized selections to a sink; the front-end decides
//! where they go.

/// Trait for clipboard operations.
pub trait ClipboardSink {
    /// Set text to clipboard. Returns false if the clipboard refused it.
    fn set_text(&mut self, text: String) -> bool;
}

/// Keeps the last copied text in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: String) -> bool {
        self.text = Some(text);
        true
    }
}
