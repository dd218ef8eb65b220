use web_sys::window;

use crate::notes::actions::ConfirmPrompt;

/// `window.confirm()` dialog. Anything but an explicit OK counts as "no".
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

impl ConfirmPrompt for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

/// Bring the note form back into view
pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
