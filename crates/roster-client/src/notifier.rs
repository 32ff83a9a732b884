use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use roster_core::{Notification, NotificationLevel};

/// Presents outcomes to the user. Successes are transient, errors persist
/// until the user dismisses them.
pub trait Notifier: Send + Sync + 'static {
    fn notify_success(&self, message: &str);
    fn notify_error(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify_success(&self, message: &str) {
        (**self).notify_success(message);
    }

    fn notify_error(&self, message: &str) {
        (**self).notify_error(message);
    }
}

/// Keeps every notification in arrival order.
#[derive(Default)]
pub struct RecordingNotifier {
    entries: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn successes(&self) -> Vec<String> {
        self.messages(NotificationLevel::Success)
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages(NotificationLevel::Error)
    }

    fn messages(&self, level: NotificationLevel) -> Vec<String> {
        self.notifications()
            .into_iter()
            .filter(|entry| entry.level == level)
            .map(|entry| entry.message)
            .collect()
    }

    fn push(&self, notification: Notification) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}

impl Notifier for RecordingNotifier {
    fn notify_success(&self, message: &str) {
        self.push(Notification::success(message));
    }

    fn notify_error(&self, message: &str) {
        self.push(Notification::error(message));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

#[derive(Debug, Clone)]
pub struct ActiveNotification {
    pub id: NotificationId,
    pub notification: Notification,
    pub created_at: Instant,
}

/// In-memory notification queue a UI renders from.
///
/// Transient entries drop out once `ttl` has elapsed; persistent entries stay
/// until [`NotificationCenter::dismiss`] is called for them.
pub struct NotificationCenter {
    ttl: Duration,
    next_id: AtomicU64,
    entries: Mutex<Vec<ActiveNotification>>,
}

pub const DEFAULT_TRANSIENT_TTL: Duration = Duration::from_secs(5);

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSIENT_TTL)
    }
}

impl NotificationCenter {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            next_id: AtomicU64::new(1),
            entries: Mutex::new(Vec::new()),
        }
    }

    pub fn visible(&self) -> Vec<ActiveNotification> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let ttl = self.ttl;
        entries.retain(|entry| entry.notification.persistent() || entry.created_at.elapsed() < ttl);
        entries.clone()
    }

    pub fn dismiss(&self, id: NotificationId) -> bool {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        entries.len() != before
    }

    fn push(&self, notification: Notification) {
        let id = NotificationId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ActiveNotification {
                id,
                notification,
                created_at: Instant::now(),
            });
    }
}

impl Notifier for NotificationCenter {
    fn notify_success(&self, message: &str) {
        self.push(Notification::success(message));
    }

    fn notify_error(&self, message: &str) {
        self.push(Notification::error(message));
    }
}
