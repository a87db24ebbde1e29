use crate::application::ports::admin_api::AdminApi;
use crate::application::ports::notifier::Notifier;
use crate::application::services::{
    AuthorService, CategoryService, DashboardService, FragmentService, ReplyService,
    SessionService, StudentService, SubscriptionService, UserService,
};
use crate::infrastructure::api::HttpAdminApi;
use crate::infrastructure::notify::MemoryNotifier;
use crate::shared::config::AppConfig;
use crate::shared::error::{AppError, Result};
use std::sync::Arc;

/// Everything a dashboard surface needs, constructed once at startup.
///
/// Notifications land in `notifications`; the surface drains that buffer and
/// renders the entries as toasts.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub notifications: Arc<MemoryNotifier>,
    pub session: Arc<SessionService>,
    pub dashboard: Arc<DashboardService>,
    pub authors: Arc<AuthorService>,
    pub students: Arc<StudentService>,
    pub users: Arc<UserService>,
    pub categories: Arc<CategoryService>,
    pub fragments: Arc<FragmentService>,
    pub replies: Arc<ReplyService>,
    pub subscriptions: Arc<SubscriptionService>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate().map_err(AppError::ConfigurationError)?;
        let api: Arc<dyn AdminApi> = Arc::new(HttpAdminApi::new(&config.api)?);
        Ok(Self::with_api(config, api))
    }

    pub fn from_env() -> Result<Self> {
        Self::new(AppConfig::from_env())
    }

    /// Wire the services around an externally supplied API client. This is
    /// the seam embedders and tests use to swap the transport out.
    pub fn with_api(config: AppConfig, api: Arc<dyn AdminApi>) -> Self {
        let notifications = Arc::new(MemoryNotifier::new());
        let notifier: Arc<dyn Notifier> = notifications.clone();
        let listing = config.listing.clone();

        Self {
            notifications,
            session: Arc::new(SessionService::new(api.clone(), notifier.clone())),
            dashboard: Arc::new(DashboardService::new(api.clone(), notifier.clone())),
            authors: Arc::new(AuthorService::new(api.clone(), notifier.clone())),
            students: Arc::new(StudentService::new(api.clone(), notifier.clone())),
            users: Arc::new(UserService::new(api.clone(), notifier.clone())),
            categories: Arc::new(CategoryService::new(api.clone(), notifier.clone())),
            fragments: Arc::new(FragmentService::new(api.clone(), notifier.clone(), &listing)),
            replies: Arc::new(ReplyService::new(api.clone(), notifier.clone(), &listing)),
            subscriptions: Arc::new(SubscriptionService::new(api, notifier, &listing)),
            config,
        }
    }
}
