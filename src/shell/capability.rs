//! Platform capabilities the shell may use if the environment provides them.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result of trying to use an optional capability.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    /// Not present in this environment. Reported to the user, not an error.
    #[error("not supported in this environment")]
    Unsupported,

    #[error("{0}")]
    Failed(String),
}

/// One-shot speech-to-text.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Listens once and returns the first recognised phrase, if any.
    async fn recognize_once(&self, locale: &str) -> Result<Option<String>, CapabilityError>;
}

pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), CapabilityError>;
}

pub trait ShareTarget: Send + Sync {
    fn share(&self, title: &str, text: &str) -> Result<(), CapabilityError>;
}

/// A capability that is never available.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unsupported;

#[async_trait]
impl SpeechRecognizer for Unsupported {
    async fn recognize_once(&self, _locale: &str) -> Result<Option<String>, CapabilityError> {
        Err(CapabilityError::Unsupported)
    }
}

impl Clipboard for Unsupported {
    fn write_text(&self, _text: &str) -> Result<(), CapabilityError> {
        Err(CapabilityError::Unsupported)
    }
}

impl ShareTarget for Unsupported {
    fn share(&self, _title: &str, _text: &str) -> Result<(), CapabilityError> {
        Err(CapabilityError::Unsupported)
    }
}

/// The set of capabilities handed to a shell.
#[derive(Clone)]
pub struct Capabilities {
    pub speech: Arc<dyn SpeechRecognizer>,
    pub clipboard: Arc<dyn Clipboard>,
    pub share: Arc<dyn ShareTarget>,
}

impl Capabilities {
    /// Nothing available.
    pub fn none() -> Self {
        Self {
            speech: Arc::new(Unsupported),
            clipboard: Arc::new(Unsupported),
            share: Arc::new(Unsupported),
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::none()
    }
}
