use super::list_state::ListState;
use super::mutation::{
    confirm_delete, confirm_status, DeleteMessages, MutationOutcome, StatusToggle,
};
use super::query::{Debouncer, PageQuery};
use super::FETCH_FAILURE_MESSAGE;
use crate::application::ports::admin_api::{AdminApi, FragmentFilters};
use crate::application::ports::notifier::{NotificationKind, Notifier};
use crate::domain::entities::Fragment;
use crate::domain::value_objects::{FragmentSortKey, PublicationStatus, RecordId, SortOrder};
use crate::shared::config::ListingConfig;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{error, warn};

/// Backs the Fragments page: paginated, filterable listing with
/// publish/block moderation.
pub struct FragmentService {
    api: Arc<dyn AdminApi>,
    notifier: Arc<dyn Notifier>,
    list: RwLock<ListState<Fragment>>,
    query: RwLock<PageQuery<FragmentFilters>>,
    debouncer: Debouncer,
}

impl FragmentService {
    pub fn new(api: Arc<dyn AdminApi>, notifier: Arc<dyn Notifier>, listing: &ListingConfig) -> Self {
        Self {
            api,
            notifier,
            list: RwLock::new(ListState::new()),
            query: RwLock::new(PageQuery::new(listing.page_size, FragmentFilters::default())),
            debouncer: Debouncer::new(Duration::from_millis(listing.search_debounce_ms)),
        }
    }

    pub async fn refresh(&self) -> bool {
        let request = self.query.read().await.request();
        match self.api.list_fragments(&request).await {
            Ok(page) => {
                self.list.write().await.replace_all(page.items);
                self.query.write().await.set_total_pages(page.pages);
                true
            }
            Err(err) => {
                error!(error = %err, "failed to load fragments");
                self.notifier
                    .notify(NotificationKind::Error, "Error fetching fragments");
                false
            }
        }
    }

    pub async fn fragments(&self) -> Vec<Fragment> {
        self.list.read().await.snapshot()
    }

    pub async fn filters(&self) -> FragmentFilters {
        self.query.read().await.filters().clone()
    }

    pub async fn page(&self) -> u32 {
        self.query.read().await.page()
    }

    pub async fn total_pages(&self) -> u32 {
        self.query.read().await.total_pages()
    }

    pub async fn is_busy(&self, fragment_id: &RecordId) -> bool {
        self.list.read().await.is_in_flight(fragment_id)
    }

    /// Raw keystroke input for the search box. Only the settled value after
    /// the idle delay triggers a fetch.
    pub async fn search_input(&self, text: impl Into<String>) {
        if let Some(settled) = self.debouncer.debounce(text).await {
            self.query.write().await.set_filters(|f| f.search = settled);
            self.refresh().await;
        }
    }

    pub async fn set_category(&self, category: Option<RecordId>) {
        self.update_filters(|f| f.category = category).await;
    }

    pub async fn set_author(&self, author: Option<RecordId>) {
        self.update_filters(|f| f.author = author).await;
    }

    pub async fn set_status(&self, status: Option<PublicationStatus>) {
        self.update_filters(|f| f.status = status).await;
    }

    pub async fn set_sort(&self, sort_by: FragmentSortKey, sort_order: SortOrder) {
        self.update_filters(|f| {
            f.sort_by = sort_by;
            f.sort_order = sort_order;
        })
        .await;
    }

    async fn update_filters(&self, mutate: impl FnOnce(&mut FragmentFilters)) {
        self.query.write().await.set_filters(mutate);
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

    /// Flip a fragment between published and blocked, evicting it from the
    /// listing when the active status filter no longer matches.
    pub async fn toggle_status(&self, fragment_id: &RecordId) -> MutationOutcome {
        let current = self.list.read().await.get(fragment_id).map(|f| f.status);
        let Some(current) = current else {
            warn!(fragment_id = %fragment_id, "status toggle for unknown fragment");
            return MutationOutcome::Ignored;
        };
        let new_status = current.toggled();
        let active_filter = self.query.read().await.filters().status;

        confirm_status(
            &self.list,
            self.notifier.as_ref(),
            StatusToggle {
                record_id: fragment_id.clone(),
                new_value: new_status,
                read: |f: &Fragment| f.status,
                write: |f, status| f.status = status,
                success_message: format!("Fragment {} successfully", new_status),
                failure_message: "Error updating fragment status".to_string(),
            },
            self.api.set_fragment_status(fragment_id, new_status),
            move |f: &Fragment| matches!(active_filter, Some(active) if f.status != active),
        )
        .await
    }

    pub async fn delete(&self, fragment_id: &RecordId) -> MutationOutcome {
        let request = self.query.read().await.request();
        confirm_delete(
            &self.list,
            self.notifier.as_ref(),
            fragment_id.clone(),
            DeleteMessages {
                success: "Fragment deleted successfully".to_string(),
                failure: "Error deleting fragment. Please try again later.".to_string(),
                refetch_failure: FETCH_FAILURE_MESSAGE.to_string(),
            },
            self.api.delete_fragment(fragment_id),
            async move {
                self.api
                    .list_fragments(&request)
                    .await
                    .map(|page| page.items)
            },
        )
        .await
    }
}
