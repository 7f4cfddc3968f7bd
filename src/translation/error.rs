//! Failure taxonomy for a single translation round trip.

use thiserror::Error;

/// Why a translation did not produce text.
///
/// The interaction shell collapses all of these into one generic notice; the
/// distinction is kept for the diagnostic log.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Network unreachable, timeout, non-2xx status or unreadable body.
    #[error("Transport failure: {0}")]
    Transport(String),

    /// Missing or rejected credential.
    #[error("Authentication failure: {0}")]
    Auth(String),

    /// The service answered but returned no usable text.
    #[error("Empty response from the translation service")]
    EmptyResponse,
}

impl TranslateError {
    /// Short machine-friendly name for log fields.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Auth(_) => "auth",
            Self::EmptyResponse => "empty_response",
        }
    }
}

impl From<reqwest::Error> for TranslateError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Transport(format!("request timed out: {err}"))
        } else {
            Self::Transport(err.to_string())
        }
    }
}
