//! Chat mode UI components.

use crate::shell::ShellState;
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(state: &ShellState) {
    println!(
        "{} {} - Interactive Translation Mode",
        Style::header("qtr"),
        Style::version(format!("v{VERSION}"))
    );
    print_languages(state);
    println!();
}

pub fn print_languages(state: &ShellState) {
    println!(
        "{} {} {}",
        Style::value(state.source()),
        Style::secondary("→"),
        Style::value(state.target())
    );
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_config(state: &ShellState, model: &str, endpoint: &str) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}       {}",
        Style::label("from"),
        Style::value(state.source())
    );
    println!(
        "  {}         {}",
        Style::label("to"),
        Style::value(state.target())
    );
    println!("  {}      {}", Style::label("model"), Style::value(model));
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::secondary(endpoint)
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    let rows = [
        ("/from [lang]", "Set the source language (picker if omitted)"),
        ("/to [lang]", "Set the target language (picker if omitted)"),
        ("/listen", "Dictate text, then translate it"),
        ("/copy", "Copy the last translation"),
        ("/share", "Share the last translation"),
        ("/config", "Show current settings"),
        ("/help", "Show this help"),
        ("/quit", "Exit chat mode"),
    ];
    for (cmd, desc) in rows {
        println!(
            "  {} {}",
            Style::command(format!("{cmd:14}")),
            Style::secondary(desc)
        );
    }
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
