//! System clipboard via arboard.

use linegrid_core::ClipboardSink;

pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: String) -> bool {
        let mut cb = match arboard::Clipboard::new() {
            Ok(cb) => cb,
            Err(e) => {
                log::warn!("clipboard unavailable: {}", e);
                return false;
            }
        };
        cb.set_text(text).is_ok()
    }
}
