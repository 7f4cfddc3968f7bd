use cli_clipboard::{ClipboardContext, ClipboardProvider};

use crate::shell::{CapabilityError, Clipboard};

/// The operating system clipboard.
///
/// A clipboard that cannot be opened (headless session, no display server)
/// counts as unsupported.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), CapabilityError> {
        let mut ctx = ClipboardContext::new().map_err(|e| {
            tracing::debug!(error = %e, "clipboard unavailable");
            CapabilityError::Unsupported
        })?;

        ctx.set_contents(text.to_string())
            .map_err(|e| CapabilityError::Failed(e.to_string()))
    }
}
