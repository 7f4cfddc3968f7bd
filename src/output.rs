//! Where `qtr` writes, and how loudly.
//!
//! stdout carries translated text and nothing else, so `qtr --to de < in.txt > out.txt`
//! produces a clean file. Spinners, notices and diagnostics go to stderr.
//! `--quiet` drops the informational stderr lines but never an error notice.
//! Colour is off with `--no-color` or a non-empty `NO_COLOR`.

use std::ffi::OsStr;
use std::sync::OnceLock;

static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub quiet: bool,
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            no_color: no_color_requested(std::env::var_os("NO_COLOR").as_deref()),
        }
    }
}

// https://no-color.org/: an empty value does not count.
fn no_color_requested(value: Option<&OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Sets the process-wide settings from the parsed flags. First call wins.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

/// The process-wide settings, or the environment defaults before [`init`].
pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

pub fn is_quiet() -> bool {
    config().quiet
}

pub fn is_no_color() -> bool {
    config().no_color
}

/// Informational line on stderr. Dropped under `--quiet`.
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}

/// Line on stderr that `--quiet` does not hide.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        eprintln!($($arg)*)
    };
}
