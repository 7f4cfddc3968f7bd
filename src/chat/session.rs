use anyhow::Result;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use inquire::{Select, Text};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::shell::{ActionOutcome, InteractionShell, ListenOutcome, SubmitOutcome};
use crate::translation::{Language, parse_source_language, parse_target_language};
use crate::ui::{Spinner, Style, is_prompt_cancelled};

/// Display-only settings for a chat session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// The model to show in `/config`.
    pub model: String,
    /// The API endpoint URL.
    pub endpoint: String,
}

impl SessionConfig {
    pub const fn new(model: String, endpoint: String) -> Self {
        Self { model, endpoint }
    }
}

#[derive(Debug, Clone, Copy)]
enum Side {
    Source,
    Target,
}

/// An interactive chat session for translation.
///
/// Provides a REPL-style interface over an [`InteractionShell`].
pub struct ChatSession {
    config: SessionConfig,
    shell: InteractionShell,
}

impl ChatSession {
    pub const fn new(config: SessionConfig, shell: InteractionShell) -> Self {
        Self { config, shell }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(&self.shell.snapshot());

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Type text to translate, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd).await {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        self.shell.set_input(text);
                        self.translate_and_print().await;
                    }
                },
                Err(e) if is_prompt_cancelled(&e) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    async fn handle_command(&self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => {
                ui::print_config(
                    &self.shell.snapshot(),
                    &self.config.model,
                    &self.config.endpoint,
                );
            }
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Quit => return false,
            SlashCommand::From(value) => self.set_language(Side::Source, value.as_deref()),
            SlashCommand::To(value) => self.set_language(Side::Target, value.as_deref()),
            SlashCommand::Listen => self.listen_and_translate().await,
            SlashCommand::Copy => {
                if self.shell.copy_output() == ActionOutcome::NothingToDo {
                    ui::print_error("Nothing to copy yet");
                }
            }
            SlashCommand::Share => match self.shell.share_output() {
                ActionOutcome::NothingToDo => ui::print_error("Nothing to share yet"),
                ActionOutcome::Done => {
                    println!("{} Opened a share draft\n", Style::success("✓"));
                }
                ActionOutcome::Unavailable | ActionOutcome::Failed => {}
            },
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
            }
        }
        true
    }

    fn set_language(&self, side: Side, value: Option<&str>) {
        let parsed = match value {
            Some(value) => match side {
                Side::Source => parse_source_language(value),
                Side::Target => parse_target_language(value),
            },
            None => match pick_language(side, self.current(side)) {
                Some(lang) => Ok(lang),
                None => return,
            },
        };

        let result = parsed.and_then(|lang| match side {
            Side::Source => {
                self.shell.set_source(lang);
                Ok(())
            }
            Side::Target => self.shell.set_target(lang),
        });

        match result {
            Ok(()) => ui::print_languages(&self.shell.snapshot()),
            Err(e) => ui::print_error(&e.to_string()),
        }
    }

    fn current(&self, side: Side) -> Language {
        match side {
            Side::Source => self.shell.source(),
            Side::Target => self.shell.target(),
        }
    }

    async fn listen_and_translate(&self) {
        let outcome = {
            let _spinner = Spinner::new("Listening...");
            self.shell.start_listening().await
        };

        match outcome {
            ListenOutcome::Recognized(transcript) => {
                println!("{} {transcript}", Style::secondary("›"));
                self.translate_and_print().await;
            }
            ListenOutcome::NoResult => {
                println!("{}\n", Style::hint("Nothing was recognised."));
            }
            ListenOutcome::Busy | ListenOutcome::Unavailable | ListenOutcome::Failed => {}
        }
    }

    async fn translate_and_print(&self) {
        let outcome = {
            let _spinner = Spinner::new("Translating...");
            self.shell.submit().await
        };

        if let SubmitOutcome::Translated(text) = outcome {
            println!("{text}");
            println!();
        }
    }
}

/// Opens a selection list. Returns `None` if the user cancels.
fn pick_language(side: Side, current: Language) -> Option<Language> {
    let (message, options): (&str, Vec<Language>) = match side {
        Side::Source => ("Source language", Language::all().collect()),
        Side::Target => ("Target language", Language::targets().collect()),
    };
    let cursor = options.iter().position(|l| *l == current).unwrap_or(0);

    match Select::new(message, options)
        .with_starting_cursor(cursor)
        .prompt()
    {
        Ok(lang) => Some(lang),
        Err(e) => {
            if !is_prompt_cancelled(&e) {
                ui::print_error(&e.to_string());
            }
            None
        }
    }
}
