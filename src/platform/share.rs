use std::io;

use crate::shell::{CapabilityError, ShareTarget};

/// Shares text by opening a draft in the default mail client.
#[derive(Debug, Clone, Copy, Default)]
pub struct MailtoShare;

impl ShareTarget for MailtoShare {
    fn share(&self, title: &str, text: &str) -> Result<(), CapabilityError> {
        open::that_detached(mailto_url(title, text)).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CapabilityError::Unsupported,
            _ => CapabilityError::Failed(e.to_string()),
        })
    }
}

fn mailto_url(title: &str, text: &str) -> String {
    format!(
        "mailto:?subject={}&body={}",
        urlencoding::encode(title),
        urlencoding::encode(text)
    )
}
