use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use parking_lot::Mutex;
use std::time::Duration;

use crate::output;

const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

// The spinner currently on screen, if any.
static ACTIVE: Mutex<Option<ProgressBar>> = parking_lot::const_mutex(None);

/// A stderr spinner shown while a request is in flight.
///
/// Hidden in quiet mode. Clears itself when dropped. While it is alive,
/// [`suspend`] hides it so other stderr output lands on its own line.
pub struct Spinner {
    progress_bar: ProgressBar,
}

impl Spinner {
    pub fn new(message: &str) -> Self {
        let target = if output::is_quiet() {
            ProgressDrawTarget::hidden()
        } else {
            ProgressDrawTarget::stderr()
        };
        let progress_bar = ProgressBar::with_draw_target(None, target);
        let style = ProgressStyle::default_spinner()
            .tick_strings(TICKS)
            .template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        progress_bar.set_style(style);
        progress_bar.set_message(message.to_string());
        progress_bar.enable_steady_tick(Duration::from_millis(80));

        *ACTIVE.lock() = Some(progress_bar.clone());
        Self { progress_bar }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        ACTIVE.lock().take();
        self.progress_bar.finish_and_clear();
    }
}

/// Runs `f` with the active spinner (if any) cleared from the terminal.
pub fn suspend<R>(f: impl FnOnce() -> R) -> R {
    let active = ACTIVE.lock().clone();
    match active {
        Some(progress_bar) => progress_bar.suspend(f),
        None => f(),
    }
}
