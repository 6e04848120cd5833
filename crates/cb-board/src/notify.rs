use std::sync::Arc;

use log::{info, warn};

/// Severity of a one-shot toast notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Success,
    Error,
    Info,
}

impl NotifyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// One-shot notification sink, implemented by the UI layer
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, level: NotifyLevel);
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn notify(&self, message: &str, level: NotifyLevel) {
        (**self).notify(message, level);
    }
}

/// Notifier that forwards toasts to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str, level: NotifyLevel) {
        match level {
            NotifyLevel::Error => warn!("[{}] {message}", level.as_str()),
            NotifyLevel::Success | NotifyLevel::Info => info!("[{}] {message}", level.as_str()),
        }
    }
}
