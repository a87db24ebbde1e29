use super::list_state::ListState;
use super::mutation::{confirm_delete, DeleteMessages, MutationOutcome};
use super::FETCH_FAILURE_MESSAGE;
use crate::application::ports::admin_api::AdminApi;
use crate::application::ports::notifier::{NotificationKind, Notifier};
use crate::domain::entities::Category;
use crate::domain::value_objects::RecordId;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::error;

/// Backs the Categories page: the one resource with client-initiated
/// creation next to deletion.
pub struct CategoryService {
    api: Arc<dyn AdminApi>,
    notifier: Arc<dyn Notifier>,
    list: RwLock<ListState<Category>>,
}

impl CategoryService {
    pub fn new(api: Arc<dyn AdminApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            list: RwLock::new(ListState::new()),
        }
    }

    pub async fn refresh(&self) -> bool {
        match self.api.list_categories().await {
            Ok(categories) => {
                self.list.write().await.replace_all(categories);
                true
            }
            Err(err) => {
                error!(error = %err, "failed to load categories");
                self.notifier
                    .notify(NotificationKind::Error, FETCH_FAILURE_MESSAGE);
                false
            }
        }
    }

    pub async fn categories(&self) -> Vec<Category> {
        self.list.read().await.snapshot()
    }

    pub async fn is_busy(&self, category_id: &RecordId) -> bool {
        self.list.read().await.is_in_flight(category_id)
    }

    /// The server assigns slug and color, so a successful create reloads the
    /// listing instead of appending locally.
    pub async fn create(&self, name: &str) -> bool {
        match self.api.create_category(name).await {
            Ok(()) => {
                self.notifier
                    .notify(NotificationKind::Success, "Category created successfully");
                self.refresh().await;
                true
            }
            Err(err) => {
                error!(error = %err, "failed to create category");
                self.notifier.notify(
                    NotificationKind::Error,
                    "Error while creating category, please try again later",
                );
                false
            }
        }
    }

    pub async fn delete(&self, category_id: &RecordId) -> MutationOutcome {
        confirm_delete(
            &self.list,
            self.notifier.as_ref(),
            category_id.clone(),
            DeleteMessages {
                success: "Category deleted successfully".to_string(),
                failure: "Error while deleting category, please try again later".to_string(),
                refetch_failure: FETCH_FAILURE_MESSAGE.to_string(),
            },
            self.api.delete_category(category_id),
            self.api.list_categories(),
        )
        .await
    }
}
