use anyhow::{Result, bail};

use super::{build_shell, load_resolved_config};
use crate::config::ResolveOptions;
use crate::input::{InputReader, InputSource};
use crate::shell::SubmitOutcome;
use crate::ui::Spinner;

pub struct TranslateOptions {
    pub text: Option<String>,
    pub file: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub model: Option<String>,
}

/// Translates one piece of text and prints the result to stdout.
///
/// Returns `Ok(false)` when the translation itself failed; the user has
/// already been told why.
pub async fn run_translate(options: TranslateOptions) -> Result<bool> {
    let source = InputSource::pick(options.text.as_deref(), options.file.as_deref());
    let input = InputReader::read(source)?;

    if input.trim().is_empty() {
        bail!("Input is empty");
    }

    let config = load_resolved_config(&ResolveOptions {
        from: options.from,
        to: options.to,
        model: options.model,
    })?;

    let shell = build_shell(&config)?;
    shell.set_input(input);

    let outcome = {
        let _spinner = Spinner::new("Translating...");
        shell.submit().await
    };

    match outcome {
        SubmitOutcome::Translated(text) => {
            println!("{text}");
            Ok(true)
        }
        SubmitOutcome::Failed(_) => Ok(false),
        SubmitOutcome::SkippedEmptyInput => bail!("Input is empty"),
        SubmitOutcome::Busy => bail!("A translation is already in progress"),
    }
}
