use crate::application::ports::admin_api::AdminApi;
use crate::application::ports::notifier::{NotificationKind, Notifier};
use crate::domain::entities::AdminUser;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error};

/// Process-wide session identity. Constructed once at startup and injected
/// into whatever needs the current operator; the only writers are the boot
/// session check, login and logout.
pub struct SessionService {
    api: Arc<dyn AdminApi>,
    notifier: Arc<dyn Notifier>,
    user: RwLock<Option<AdminUser>>,
}

impl SessionService {
    pub fn new(api: Arc<dyn AdminApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            user: RwLock::new(None),
        }
    }

    /// Boot-time session check against the stored cookie. A failure just
    /// leaves the session empty; the caller falls through to the login view.
    pub async fn bootstrap(&self) -> Option<AdminUser> {
        match self.api.fetch_session().await {
            Ok(user) => {
                *self.user.write().await = user.clone();
                user
            }
            Err(err) => {
                debug!(error = %err, "session check failed");
                None
            }
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> bool {
        match self.api.login(email, password).await {
            Ok(user) => {
                *self.user.write().await = Some(user);
                true
            }
            Err(err) => {
                debug!(error = %err, "login rejected");
                self.notifier
                    .notify(NotificationKind::Error, "Invalid email or password");
                false
            }
        }
    }

    pub async fn logout(&self) -> bool {
        match self.api.logout().await {
            Ok(()) => {
                *self.user.write().await = None;
                true
            }
            Err(err) => {
                error!(error = %err, "logout failed");
                self.notifier.notify(
                    NotificationKind::Error,
                    "Something went wrong, please try later.",
                );
                false
            }
        }
    }

    pub async fn current_user(&self) -> Option<AdminUser> {
        self.user.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.user.read().await.is_some()
    }

    /// Gates the admin-only controls (create moderator, delete user).
    pub async fn is_admin(&self) -> bool {
        self.user
            .read()
            .await
            .as_ref()
            .map_or(false, AdminUser::is_admin)
    }
}
