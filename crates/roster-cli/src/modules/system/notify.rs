use std::sync::atomic::{AtomicUsize, Ordering};

use roster_client::Notifier;

/// Writes notifications to stderr so stdout stays machine readable.
#[derive(Default)]
pub struct TerminalNotifier {
    errors: AtomicUsize,
}

impl TerminalNotifier {
    pub fn error_count(&self) -> usize {
        self.errors.load(Ordering::Relaxed)
    }
}

impl Notifier for TerminalNotifier {
    fn notify_success(&self, message: &str) {
        eprintln!("{message}");
    }

    fn notify_error(&self, message: &str) {
        self.errors.fetch_add(1, Ordering::Relaxed);
        eprintln!("error: {message}");
    }
}
