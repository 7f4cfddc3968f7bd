//! Subcommand implementations.

/// Chat mode command handler.
pub mod chat;

/// Config command handler.
pub mod config;

/// One-shot translation command handler.
pub mod translate;

use anyhow::Result;
use std::sync::Arc;

use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::platform::{TerminalNotifier, terminal_capabilities};
use crate::shell::{InteractionShell, ShellState};
use crate::translation::GeminiClient;

/// Loads the config file (if any) and merges the CLI overrides into it.
pub fn load_resolved_config(options: &ResolveOptions) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_optional()?;
    let resolved = resolve_config(options, &file_config)?;

    if resolved.api_key.is_none() {
        crate::warn!(
            "{} No API key found. Set the {} environment variable.",
            crate::ui::Style::warning("Warning:"),
            resolved.api_key_env
        );
    }

    Ok(resolved)
}

/// Builds a shell wired to the Gemini client and the terminal's capabilities.
pub fn build_shell(config: &ResolvedConfig) -> Result<InteractionShell> {
    let client = GeminiClient::new(config.client_config())?;
    let state = ShellState::with_languages(config.source, config.target)?;

    Ok(
        InteractionShell::new(Arc::new(client), Arc::new(TerminalNotifier))
            .with_capabilities(terminal_capabilities(config.speech_command.as_deref()))
            .with_state(state),
    )
}
