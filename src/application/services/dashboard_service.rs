use crate::application::ports::admin_api::AdminApi;
use crate::application::ports::notifier::{NotificationKind, Notifier};
use crate::domain::entities::DashboardStats;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::error;

/// Backs the dashboard landing page cards.
pub struct DashboardService {
    api: Arc<dyn AdminApi>,
    notifier: Arc<dyn Notifier>,
    stats: RwLock<Option<DashboardStats>>,
}

impl DashboardService {
    pub fn new(api: Arc<dyn AdminApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            stats: RwLock::new(None),
        }
    }

    pub async fn refresh(&self) -> bool {
        match self.api.fetch_stats().await {
            Ok(stats) => {
                *self.stats.write().await = Some(stats);
                true
            }
            Err(err) => {
                error!(error = %err, "failed to load dashboard stats");
                self.notifier.notify(
                    NotificationKind::Error,
                    "Something went wrong, please try again later!",
                );
                false
            }
        }
    }

    pub async fn stats(&self) -> Option<DashboardStats> {
        *self.stats.read().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::admin_api::MockAdminApi;
    use crate::application::services::testing::RecordingNotifier;

    #[tokio::test]
    async fn refresh_stores_latest_counters() {
        let mut api = MockAdminApi::new();
        api.expect_fetch_stats().returning(|| {
            Ok(DashboardStats {
                active_authors: 3,
                in_active_authors: 1,
                active_students: 12,
                in_active_students: 4,
                total_active: 15,
                total_inactive: 5,
            })
        });

        let notifier = Arc::new(RecordingNotifier::default());
        let service = DashboardService::new(Arc::new(api), notifier);

        assert!(service.refresh().await);
        let stats = service.stats().await.unwrap();
        assert_eq!(stats.active_authors, 3);
        assert_eq!(stats.total_inactive, 5);
    }
}
