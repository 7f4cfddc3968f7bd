use anyhow::Result;
use clap::Parser;

use quick_translator::cli::commands::{chat, config, translate};
use quick_translator::cli::{Args, Command};
use quick_translator::logging;
use quick_translator::output::{self, OutputConfig};
use quick_translator::translation::{
    parse_source_language, parse_target_language, print_languages,
};

fn validate_languages(from: Option<&str>, to: Option<&str>) -> Result<()> {
    if let Some(lang) = from {
        parse_source_language(lang)?;
    }
    if let Some(lang) = to {
        parse_target_language(lang)?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let defaults = OutputConfig::default();
    let no_color = args.no_color || defaults.no_color;
    output::init(OutputConfig {
        quiet: args.quiet,
        no_color,
    });
    logging::init(args.verbose, no_color);

    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Config { init }) => {
            config::run_config(init)?;
        }
        Some(Command::Chat { from, to, model }) => {
            validate_languages(from.as_deref(), to.as_deref())?;

            let options = chat::ChatOptions { from, to, model };
            chat::run_chat(options).await?;
        }
        None => {
            validate_languages(args.from.as_deref(), args.to.as_deref())?;

            let options = translate::TranslateOptions {
                text: args.text,
                file: args.file,
                from: args.from,
                to: args.to,
                model: args.model,
            };
            if !translate::run_translate(options).await? {
                std::process::exit(exitcode::UNAVAILABLE);
            }
        }
    }

    Ok(())
}
