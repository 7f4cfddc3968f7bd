//! User-facing notices raised by the interaction shell.

use std::fmt;

/// An optional platform feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    SpeechRecognition,
    Clipboard,
    Share,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SpeechRecognition => "Speech recognition",
            Self::Clipboard => "Clipboard access",
            Self::Share => "Sharing",
        })
    }
}

/// A message the user should see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Any translation failure. Deliberately generic.
    TranslationFailed,
    Copied,
    /// An optional capability is missing from this environment.
    Unavailable(Capability),
    /// The capability exists but the attempt failed.
    CapabilityFailed(Capability, String),
}

impl Notice {
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::TranslationFailed | Self::CapabilityFailed(..))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TranslationFailed => {
                f.write_str("Failed to translate. Please check your connection or API key.")
            }
            Self::Copied => f.write_str("Copied to clipboard!"),
            Self::Unavailable(capability) => {
                write!(f, "{capability} is not supported in this environment.")
            }
            Self::CapabilityFailed(capability, reason) => {
                write!(f, "{capability} failed: {reason}")
            }
        }
    }
}

/// Where notices go.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: &Notice);
}
