//! `navigator.clipboard` adapter for the copy control.
//!
//! TRADE-OFFS
//! ==========
//! The async clipboard API needs a secure context and user activation; when it
//! is missing the write fails with `Unavailable` and the button shows the
//! failure state. Native builds always report `Unavailable`.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use messages::copy::{Clipboard, ClipboardError};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        #[cfg(feature = "csr")]
        {
            let clipboard = web_sys::window()
                .map(|w| w.navigator().clipboard())
                .ok_or(ClipboardError::Unavailable)?;
            wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
                .await
                .map(|_| ())
                .map_err(|e| ClipboardError::Rejected(e.as_string().unwrap_or_else(|| format!("{e:?}"))))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = text;
            Err(ClipboardError::Unavailable)
        }
    }
}
