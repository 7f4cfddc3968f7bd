//! The interaction shell: UI state plus the actions a user can trigger.
//!
//! The shell is independent of any front-end. It talks to the translation
//! service through [`Translator`](crate::translation::Translator), to the
//! platform through the traits in [`capability`], and to the user through a
//! [`Notifier`].

/// Optional platform capabilities (speech, clipboard, share).
pub mod capability;
mod interaction;
mod notice;
mod state;

pub use capability::{
    Capabilities, CapabilityError, Clipboard, ShareTarget, SpeechRecognizer, Unsupported,
};
pub use interaction::{
    ActionOutcome, InteractionShell, ListenOutcome, RECOGNITION_LOCALE, SHARE_TITLE,
    SubmitOutcome,
};
pub use notice::{Capability, Notice, Notifier};
pub use state::ShellState;
