pub mod admin_api;
pub mod notifier;

pub use admin_api::AdminApi;
pub use notifier::{NotificationKind, Notifier};
