use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, error};

use super::capability::{Capabilities, CapabilityError};
use super::notice::{Capability, Notice, Notifier};
use super::state::ShellState;
use crate::translation::{Language, LanguageError, TranslateError, TranslationRequest, Translator};

/// Locale handed to the speech recognizer.
pub const RECOGNITION_LOCALE: &str = "en-US";

/// Title used when sharing a translation.
pub const SHARE_TITLE: &str = "Translation";

/// What happened to a submit.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The output now holds this text.
    Translated(String),
    /// Input was empty or whitespace; nothing was sent.
    SkippedEmptyInput,
    /// Another translation is in flight; nothing was sent.
    Busy,
    /// The translation failed and the user was notified.
    Failed(TranslateError),
}

/// What happened to a voice-capture attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListenOutcome {
    Recognized(String),
    NoResult,
    Busy,
    Unavailable,
    Failed,
}

/// What happened to a copy or share action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Done,
    /// There is no output to act on.
    NothingToDo,
    Unavailable,
    Failed,
}

/// Clears a state flag when dropped, whatever path the caller leaves by.
struct FlagGuard<'a> {
    state: &'a Mutex<ShellState>,
    clear: fn(&mut ShellState),
}

impl<'a> FlagGuard<'a> {
    const fn new(state: &'a Mutex<ShellState>, clear: fn(&mut ShellState)) -> Self {
        Self { state, clear }
    }
}

impl Drop for FlagGuard<'_> {
    fn drop(&mut self) {
        (self.clear)(&mut self.state.lock());
    }
}

/// Holds the ephemeral UI state and runs user actions against it.
///
/// The state lock is never held across an await, so the shell can be shared
/// by reference between concurrently polled actions. At most one translation
/// and one voice capture run at a time; extra requests are ignored.
pub struct InteractionShell {
    state: Mutex<ShellState>,
    translator: Arc<dyn Translator>,
    capabilities: Capabilities,
    notifier: Arc<dyn Notifier>,
}

impl InteractionShell {
    pub fn new(translator: Arc<dyn Translator>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            state: Mutex::new(ShellState::default()),
            translator,
            capabilities: Capabilities::none(),
            notifier,
        }
    }

    #[must_use]
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    #[must_use]
    pub fn with_state(self, state: ShellState) -> Self {
        *self.state.lock() = state;
        self
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> ShellState {
        self.state.lock().clone()
    }

    pub fn source(&self) -> Language {
        self.state.lock().source()
    }

    pub fn target(&self) -> Language {
        self.state.lock().target()
    }

    pub fn output_text(&self) -> String {
        self.state.lock().output_text.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().is_loading
    }

    pub fn is_listening(&self) -> bool {
        self.state.lock().is_listening
    }

    pub fn set_input(&self, text: impl Into<String>) {
        self.state.lock().input_text = text.into();
    }

    pub fn set_source(&self, lang: Language) {
        self.state.lock().set_source(lang);
    }

    pub fn set_target(&self, lang: Language) -> Result<(), LanguageError> {
        self.state.lock().set_target(lang)
    }

    /// Translates the current input into the output.
    pub async fn submit(&self) -> SubmitOutcome {
        let request = {
            let mut state = self.state.lock();
            if state.is_loading {
                debug!("submit ignored: translation already in flight");
                return SubmitOutcome::Busy;
            }
            if !state.has_input() {
                return SubmitOutcome::SkippedEmptyInput;
            }
            state.is_loading = true;
            TranslationRequest::new(state.source(), state.target(), state.input_text.clone())
        };
        let _loading = FlagGuard::new(&self.state, |state| state.is_loading = false);

        match self.translator.translate(&request).await {
            Ok(text) => {
                self.state.lock().output_text.clone_from(&text);
                SubmitOutcome::Translated(text)
            }
            Err(e) => {
                self.notifier.notify(&Notice::TranslationFailed);
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Runs one speech recognition session and puts the result in the input.
    pub async fn start_listening(&self) -> ListenOutcome {
        {
            let mut state = self.state.lock();
            if state.is_listening {
                return ListenOutcome::Busy;
            }
            state.is_listening = true;
        }
        let _listening = FlagGuard::new(&self.state, |state| state.is_listening = false);

        match self
            .capabilities
            .speech
            .recognize_once(RECOGNITION_LOCALE)
            .await
        {
            Ok(Some(transcript)) => {
                self.state.lock().input_text.clone_from(&transcript);
                ListenOutcome::Recognized(transcript)
            }
            Ok(None) => ListenOutcome::NoResult,
            Err(CapabilityError::Unsupported) => {
                self.notifier
                    .notify(&Notice::Unavailable(Capability::SpeechRecognition));
                ListenOutcome::Unavailable
            }
            Err(CapabilityError::Failed(reason)) => {
                debug!(%reason, "speech recognition failed");
                self.notifier.notify(&Notice::CapabilityFailed(
                    Capability::SpeechRecognition,
                    reason,
                ));
                ListenOutcome::Failed
            }
        }
    }

    /// Writes the current output to the clipboard.
    pub fn copy_output(&self) -> ActionOutcome {
        let text = self.output_text();
        if text.is_empty() {
            return ActionOutcome::NothingToDo;
        }

        match self.capabilities.clipboard.write_text(&text) {
            Ok(()) => {
                self.notifier.notify(&Notice::Copied);
                ActionOutcome::Done
            }
            Err(CapabilityError::Unsupported) => {
                self.notifier
                    .notify(&Notice::Unavailable(Capability::Clipboard));
                ActionOutcome::Unavailable
            }
            Err(CapabilityError::Failed(reason)) => {
                self.notifier
                    .notify(&Notice::CapabilityFailed(Capability::Clipboard, reason));
                ActionOutcome::Failed
            }
        }
    }

    /// Hands the current output to the platform share facility.
    pub fn share_output(&self) -> ActionOutcome {
        let text = self.output_text();
        if text.is_empty() {
            return ActionOutcome::NothingToDo;
        }

        match self.capabilities.share.share(SHARE_TITLE, &text) {
            Ok(()) => ActionOutcome::Done,
            Err(CapabilityError::Unsupported) => {
                self.notifier.notify(&Notice::Unavailable(Capability::Share));
                ActionOutcome::Unavailable
            }
            Err(CapabilityError::Failed(reason)) => {
                error!(%reason, "share failed");
                ActionOutcome::Failed
            }
        }
    }
}
