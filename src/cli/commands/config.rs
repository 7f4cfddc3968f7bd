//! Config command handler.

use anyhow::Result;

use crate::config::{ConfigFile, ConfigManager, ResolveOptions, resolve_config};
use crate::ui::Style;

/// Prints the resolved configuration. With `init`, first writes a starter
/// config file unless one already exists.
pub fn run_config(init: bool) -> Result<()> {
    let manager = ConfigManager::new()?;

    if init {
        if manager.config_path().exists() {
            println!(
                "Config file already exists: {}",
                Style::secondary(manager.config_path().display())
            );
        } else {
            manager.save(&ConfigFile::starter())?;
            println!(
                "{} Wrote {}",
                Style::success("✓"),
                Style::secondary(manager.config_path().display())
            );
        }
        println!();
    }

    let file_config = manager.load_optional()?;
    let resolved = resolve_config(&ResolveOptions::default(), &file_config)?;

    let file_note = if manager.config_path().exists() {
        String::new()
    } else {
        " (not found, using defaults)".to_string()
    };

    println!("{}", Style::header("Configuration"));
    println!(
        "  {}          {}{}",
        Style::label("file"),
        Style::secondary(manager.config_path().display()),
        Style::hint(file_note)
    );
    println!(
        "  {}      {}",
        Style::label("endpoint"),
        Style::secondary(&resolved.endpoint)
    );
    println!(
        "  {}         {}",
        Style::label("model"),
        Style::value(&resolved.model)
    );
    println!(
        "  {}          {}",
        Style::label("from"),
        Style::value(resolved.source)
    );
    println!(
        "  {}            {}",
        Style::label("to"),
        Style::value(resolved.target)
    );
    println!(
        "  {}   {}",
        Style::label("temperature"),
        Style::value(resolved.temperature)
    );
    println!(
        "  {}       {}s",
        Style::label("timeout"),
        Style::value(resolved.timeout.as_secs())
    );
    println!(
        "  {}       {} {}",
        Style::label("api_key"),
        if resolved.api_key.is_some() {
            Style::success("(set)")
        } else {
            Style::warning("(not set)")
        },
        Style::hint(format!("from ${}", resolved.api_key_env))
    );
    println!(
        "  {}        {}",
        Style::label("speech"),
        resolved
            .speech_command
            .as_deref()
            .map_or_else(|| Style::secondary("(unsupported)"), Style::value)
    );

    Ok(())
}
