use dapp_common::{Level, Notification, Notify};
use std::io::Write;
use yansi::Paint;

/// Prints notifications to stderr, keeping stdout for command output.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShellNotifier;

impl ShellNotifier {
    /// Formats a notification for the terminal.
    pub fn render(notification: &Notification) -> String {
        let message = notification.message.as_str();
        match notification.level {
            Level::Info => message.to_string(),
            Level::Success => message.green().to_string(),
            Level::Error => format!("{} {}", "Error:".red().bold(), message.red()),
        }
    }
}

impl Notify for ShellNotifier {
    fn notify(&self, notification: Notification) {
        let _ = writeln!(std::io::stderr().lock(), "{}", Self::render(&notification));
    }
}
