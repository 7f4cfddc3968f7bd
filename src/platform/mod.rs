//! Terminal implementations of the shell's platform capabilities.

mod clipboard;
mod notifier;
mod share;
mod speech;

use std::sync::Arc;

pub use clipboard::SystemClipboard;
pub use notifier::TerminalNotifier;
pub use share::MailtoShare;
pub use speech::{CommandRecognizer, SPEECH_LOCALE_ENV};

use crate::shell::{Capabilities, SpeechRecognizer, Unsupported};

/// Capabilities available from a terminal session.
///
/// Speech recognition is only present when a dictation command is configured.
pub fn terminal_capabilities(speech_command: Option<&str>) -> Capabilities {
    let speech: Arc<dyn SpeechRecognizer> = match speech_command {
        Some(cmd) if !cmd.trim().is_empty() => Arc::new(CommandRecognizer::new(cmd)),
        _ => Arc::new(Unsupported),
    };

    Capabilities {
        speech,
        clipboard: Arc::new(SystemClipboard),
        share: Arc::new(MailtoShare),
    }
}
