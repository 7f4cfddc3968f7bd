use async_trait::async_trait;
use tokio::process::Command;

use crate::shell::{CapabilityError, SpeechRecognizer};

/// Environment variable carrying the recognition locale to the command.
pub const SPEECH_LOCALE_ENV: &str = "QTR_SPEECH_LOCALE";

/// Speech recognition delegated to an external dictation command.
///
/// The command is run through the system shell once per session. Its trimmed
/// stdout is the transcript; empty stdout means nothing was recognised.
#[derive(Debug, Clone)]
pub struct CommandRecognizer {
    command: String,
}

impl CommandRecognizer {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    fn build(&self) -> Command {
        #[cfg(windows)]
        let mut cmd = {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(&self.command);
            cmd
        };
        #[cfg(not(windows))]
        let mut cmd = {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(&self.command);
            cmd
        };
        cmd.kill_on_drop(true);
        cmd
    }
}

#[async_trait]
impl SpeechRecognizer for CommandRecognizer {
    async fn recognize_once(&self, locale: &str) -> Result<Option<String>, CapabilityError> {
        let output = self
            .build()
            .env(SPEECH_LOCALE_ENV, locale)
            .output()
            .await
            .map_err(|e| CapabilityError::Failed(format!("failed to start speech command: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CapabilityError::Failed(format!(
                "speech command exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let transcript = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok((!transcript.is_empty()).then_some(transcript))
    }
}
