use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "qtr")]
#[command(about = "Quick AI-powered translator for the terminal")]
#[command(version)]
pub struct Args {
    /// Text to translate (reads --file or stdin if not provided)
    pub text: Option<String>,

    /// Read the text to translate from a file
    #[arg(short = 'f', long, conflicts_with = "text")]
    pub file: Option<String>,

    /// Source language code or name (default: auto)
    #[arg(short = 's', long = "from")]
    pub from: Option<String>,

    /// Target language code or name (e.g., es, ja, "Chinese (Traditional)")
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Suppress status messages
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Show diagnostic logs on stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List supported languages
    Languages,
    /// Show the resolved configuration
    Config {
        /// Write a starter config file if none exists
        #[arg(long)]
        init: bool,
    },
    /// Interactive translation session
    Chat {
        /// Source language code or name (default: auto)
        #[arg(short = 's', long = "from")]
        from: Option<String>,

        /// Target language code or name
        #[arg(short = 't', long = "to")]
        to: Option<String>,

        /// Model name
        #[arg(short = 'm', long)]
        model: Option<String>,
    },
}
