use std::sync::atomic::{AtomicBool, Ordering};

use cb_board::{Notifier, NotifyLevel};

/// Prints toasts to stderr and remembers whether any error was shown
#[derive(Debug, Default)]
pub struct ConsoleNotifier {
    saw_error: AtomicBool,
}

impl ConsoleNotifier {
    pub fn saw_error(&self) -> bool {
        self.saw_error.load(Ordering::SeqCst)
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str, level: NotifyLevel) {
        if level == NotifyLevel::Error {
            self.saw_error.store(true, Ordering::SeqCst);
        }
        eprintln!("[{}] {message}", level.as_str());
    }
}
