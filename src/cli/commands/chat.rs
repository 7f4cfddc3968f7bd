use anyhow::Result;

use super::{build_shell, load_resolved_config};
use crate::chat::{ChatSession, SessionConfig};
use crate::config::ResolveOptions;

pub struct ChatOptions {
    pub from: Option<String>,
    pub to: Option<String>,
    pub model: Option<String>,
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let config = load_resolved_config(&ResolveOptions {
        from: options.from,
        to: options.to,
        model: options.model,
    })?;

    let shell = build_shell(&config)?;
    let mut session = ChatSession::new(
        SessionConfig::new(config.model.clone(), config.endpoint.clone()),
        shell,
    );
    session.run().await
}
