use super::list_state::ListState;
use super::query::PageQuery;
use crate::application::ports::admin_api::{AdminApi, SubscriptionFilters};
use crate::application::ports::notifier::{NotificationKind, Notifier};
use crate::domain::entities::{Subscription, SubscriptionStats, SubscriptionStatus};
use crate::shared::config::ListingConfig;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::error;

/// Backs the Subscriptions page. Billing data is read-only here; anything
/// that mutates a subscription happens in the payment provider's own
/// dashboard.
pub struct SubscriptionService {
    api: Arc<dyn AdminApi>,
    notifier: Arc<dyn Notifier>,
    list: RwLock<ListState<Subscription>>,
    query: RwLock<PageQuery<SubscriptionFilters>>,
    stats: RwLock<Option<SubscriptionStats>>,
}

impl SubscriptionService {
    pub fn new(api: Arc<dyn AdminApi>, notifier: Arc<dyn Notifier>, listing: &ListingConfig) -> Self {
        Self {
            api,
            notifier,
            list: RwLock::new(ListState::new()),
            query: RwLock::new(PageQuery::new(
                listing.page_size,
                SubscriptionFilters::default(),
            )),
            stats: RwLock::new(None),
        }
    }

    pub async fn refresh(&self) -> bool {
        let request = self.query.read().await.request();
        match self.api.list_subscriptions(&request).await {
            Ok(page) => {
                self.list.write().await.replace_all(page.items);
                self.query.write().await.set_total_pages(page.pages);
                true
            }
            Err(err) => {
                error!(error = %err, "failed to load subscriptions");
                self.notifier
                    .notify(NotificationKind::Error, "Error fetching subscriptions");
                false
            }
        }
    }

    pub async fn refresh_stats(&self) -> bool {
        match self.api.fetch_subscription_stats().await {
            Ok(stats) => {
                *self.stats.write().await = Some(stats);
                true
            }
            Err(err) => {
                error!(error = %err, "failed to load subscription stats");
                self.notifier
                    .notify(NotificationKind::Error, "Error fetching subscription stats");
                false
            }
        }
    }

    pub async fn subscriptions(&self) -> Vec<Subscription> {
        self.list.read().await.snapshot()
    }

    pub async fn stats(&self) -> Option<SubscriptionStats> {
        self.stats.read().await.clone()
    }

    pub async fn page(&self) -> u32 {
        self.query.read().await.page()
    }

    pub async fn total_pages(&self) -> u32 {
        self.query.read().await.total_pages()
    }

    pub async fn set_search(&self, search: impl Into<String>) {
        let search = search.into();
        self.query.write().await.set_filters(|f| f.search = search);
        self.refresh().await;
    }

    pub async fn set_status(&self, status: Option<SubscriptionStatus>) {
        self.query.write().await.set_filters(|f| f.status = status);
        self.refresh().await;
    }

    pub async fn next_page(&self) {
        let moved = self.query.write().await.next_page();
        if moved {
            self.refresh().await;
        }
    }

    pub async fn prev_page(&self) {
        let moved = self.query.write().await.prev_page();
        if moved {
            self.refresh().await;
        }
    }
}
