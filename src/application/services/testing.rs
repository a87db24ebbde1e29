use crate::application::ports::notifier::{NotificationKind, Notifier};
use std::sync::Mutex;

/// Captures emitted notifications for assertions.
#[derive(Default)]
pub(crate) struct RecordingNotifier {
    messages: Mutex<Vec<(NotificationKind, String)>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((kind, message.to_string()));
    }
}

impl RecordingNotifier {
    pub fn taken(&self) -> Vec<(NotificationKind, String)> {
        self.messages.lock().unwrap().clone()
    }
}
