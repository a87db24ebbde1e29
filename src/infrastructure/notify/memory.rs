use crate::application::ports::notifier::{NotificationKind, Notifier};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// Buffering notification sink. A presentation surface drains it on its own
/// cadence and renders the entries as toasts.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    buffer: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take everything emitted since the last drain, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.buffer.lock().expect("notifier poisoned"))
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().expect("notifier poisoned").is_empty()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        self.buffer
            .lock()
            .expect("notifier poisoned")
            .push(Notification {
                kind,
                message: message.to_string(),
            });
    }
}
