use crate::application::ports::notifier::{NotificationKind, Notifier};
use tracing::{info, warn};

/// Notification sink for headless use: routes everything into the log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        match kind {
            NotificationKind::Error => warn!(target: "fragments_admin::notify", "{message}"),
            NotificationKind::Success | NotificationKind::Info => {
                info!(target: "fragments_admin::notify", "{message}")
            }
        }
    }
}
