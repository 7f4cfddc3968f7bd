use crate::shell::{Notice, Notifier};
use crate::ui::{self, Style};

/// Prints notices to stderr. Errors are always shown; the rest respect quiet mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: &Notice) {
        // A request spinner may be drawing on stderr.
        ui::suspend(|| match notice {
            Notice::Copied => crate::status!("{} {notice}", Style::success("✓")),
            Notice::Unavailable(_) => crate::warn!("{} {notice}", Style::warning("Notice:")),
            _ if notice.is_error() => crate::warn!("{} {notice}", Style::error("Error:")),
            _ => crate::status!("{notice}"),
        });
    }
}
