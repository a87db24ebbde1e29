use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// Transient message sink the presentation surface subscribes to.
/// Fire-and-forget: emitting never fails and nothing is returned.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NotificationKind, message: &str);
}
