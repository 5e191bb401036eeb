//! User-facing notifications.
//!
//! Operations that must never fail loudly (connecting a wallet, calling a contract) report
//! their outcome through a [`Notify`] sink owned by the presentation layer.

use auto_impl::auto_impl;
use parking_lot::Mutex;
use std::fmt;

/// Severity of a [`Notification`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    /// Progress information.
    Info,
    /// An operation completed.
    Success,
    /// An operation failed.
    Error,
}

/// A message meant for the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    /// Severity.
    pub level: Level,
    /// Text shown to the user.
    pub message: String,
}

impl Notification {
    /// Creates an informational notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: Level::Info, message: message.into() }
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: Level::Success, message: message.into() }
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self { level: Level::Error, message: message.into() }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// A sink for [`Notification`]s.
#[auto_impl(&, Arc, Box)]
pub trait Notify: Send + Sync {
    /// Delivers a notification to the user.
    fn notify(&self, notification: Notification);
}

/// A [`Notify`] sink that keeps every notification in memory.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything recorded so far.
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().clone()
    }

    /// Returns the messages recorded with the given level.
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.notifications
            .lock()
            .iter()
            .filter(|n| n.level == level)
            .map(|n| n.message.clone())
            .collect()
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.notifications.lock())
    }
}

impl Notify for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().push(notification);
    }
}
