use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/config", "Show current settings"),
    ("/copy", "Copy the last translation"),
    ("/from", "Set the source language"),
    ("/help", "Show available commands"),
    ("/listen", "Dictate text to translate"),
    ("/quit", "Exit chat mode"),
    ("/share", "Share the last translation"),
    ("/to", "Set the target language"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Slash command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Config,
    Copy,
    /// Source language; `None` opens a picker.
    From(Option<String>),
    Help,
    Listen,
    Quit,
    Share,
    /// Target language; `None` opens a picker.
    To(Option<String>),
    Unknown(String),
}

/// Input types
#[derive(Debug)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Input::Empty;
    }

    trimmed
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let (name, rest) = cmd
        .split_once(char::is_whitespace)
        .map_or((cmd, ""), |(name, rest)| (name, rest.trim()));
    let arg = (!rest.is_empty()).then(|| rest.to_string());

    let command = match name {
        "config" => SlashCommand::Config,
        "copy" => SlashCommand::Copy,
        "from" => SlashCommand::From(arg),
        "help" => SlashCommand::Help,
        "listen" | "mic" => SlashCommand::Listen,
        "quit" | "exit" | "q" => SlashCommand::Quit,
        "share" => SlashCommand::Share,
        "to" => SlashCommand::To(arg),
        _ => SlashCommand::Unknown(cmd.split_whitespace().collect::<Vec<_>>().join(" ")),
    };
    Input::Command(command)
}
