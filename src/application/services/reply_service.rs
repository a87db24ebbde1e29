use super::list_state::ListState;
use super::mutation::{
    confirm_delete, confirm_status, DeleteMessages, MutationOutcome, StatusToggle,
};
use super::query::{Debouncer, PageQuery};
use super::FETCH_FAILURE_MESSAGE;
use crate::application::ports::admin_api::{AdminApi, ReplyFilters, ReplyTarget};
use crate::application::ports::notifier::{NotificationKind, Notifier};
use crate::domain::entities::Reply;
use crate::domain::value_objects::{
    PublicationStatus, RecordId, ReplyDepth, ReplySortKey, SortOrder,
};
use crate::shared::config::ListingConfig;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{error, warn};

/// Backs the Comments page: the paginated reply listing with publish/block
/// moderation across all nesting depths.
pub struct ReplyService {
    api: Arc<dyn AdminApi>,
    notifier: Arc<dyn Notifier>,
    list: RwLock<ListState<Reply>>,
    query: RwLock<PageQuery<ReplyFilters>>,
    debouncer: Debouncer,
}

impl ReplyService {
    pub fn new(api: Arc<dyn AdminApi>, notifier: Arc<dyn Notifier>, listing: &ListingConfig) -> Self {
        Self {
            api,
            notifier,
            list: RwLock::new(ListState::new()),
            query: RwLock::new(PageQuery::new(listing.page_size, ReplyFilters::default())),
            debouncer: Debouncer::new(Duration::from_millis(listing.search_debounce_ms)),
        }
    }

    pub async fn refresh(&self) -> bool {
        let request = self.query.read().await.request();
        match self.api.list_replies(&request).await {
            Ok(page) => {
                self.list.write().await.replace_all(page.items);
                self.query.write().await.set_total_pages(page.pages);
                true
            }
            Err(err) => {
                error!(error = %err, "failed to load replies");
                self.notifier
                    .notify(NotificationKind::Error, "Error fetching replies");
                false
            }
        }
    }

    pub async fn replies(&self) -> Vec<Reply> {
        self.list.read().await.snapshot()
    }

    pub async fn filters(&self) -> ReplyFilters {
        self.query.read().await.filters().clone()
    }

    pub async fn page(&self) -> u32 {
        self.query.read().await.page()
    }

    pub async fn total_pages(&self) -> u32 {
        self.query.read().await.total_pages()
    }

    pub async fn is_busy(&self, reply_id: &RecordId) -> bool {
        self.list.read().await.is_in_flight(reply_id)
    }

    pub async fn search_input(&self, text: impl Into<String>) {
        if let Some(settled) = self.debouncer.debounce(text).await {
            self.query.write().await.set_filters(|f| f.search = settled);
            self.refresh().await;
        }
    }

    pub async fn set_category(&self, category: Option<RecordId>) {
        self.update_filters(|f| f.category = category).await;
    }

    pub async fn set_user(&self, user: Option<RecordId>) {
        self.update_filters(|f| f.user = user).await;
    }

    pub async fn set_depth(&self, depth: Option<ReplyDepth>) {
        self.update_filters(|f| f.depth = depth).await;
    }

    pub async fn set_status(&self, status: Option<PublicationStatus>) {
        self.update_filters(|f| f.status = status).await;
    }

    pub async fn set_sort(&self, sort_by: ReplySortKey, sort_order: SortOrder) {
        self.update_filters(|f| {
            f.sort_by = sort_by;
            f.sort_order = sort_order;
        })
        .await;
    }

    async fn update_filters(&self, mutate: impl FnOnce(&mut ReplyFilters)) {
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

    /// Flip a reply between published and blocked. The confirmation request
    /// carries the reply's location in its thread so the server can reach
    /// the nested document.
    pub async fn toggle_status(&self, reply_id: &RecordId) -> MutationOutcome {
        let located = {
            let guard = self.list.read().await;
            guard.get(reply_id).map(|reply| (target_of(reply), reply.status))
        };
        let Some((target, current)) = located else {
            warn!(reply_id = %reply_id, "status toggle for unknown reply");
            return MutationOutcome::Ignored;
        };
        let new_status = current.toggled();
        let active_filter = self.query.read().await.filters().status;

        confirm_status(
            &self.list,
            self.notifier.as_ref(),
            StatusToggle {
                record_id: reply_id.clone(),
                new_value: new_status,
                read: |r: &Reply| r.status,
                write: |r, status| r.status = status,
                success_message: format!("Reply {} successfully", new_status),
                failure_message: "Error updating reply status".to_string(),
            },
            self.api.set_reply_status(&target, new_status),
            move |r: &Reply| matches!(active_filter, Some(active) if r.status != active),
        )
        .await
    }

    pub async fn delete(&self, reply_id: &RecordId) -> MutationOutcome {
        let located = self.list.read().await.get(reply_id).map(target_of);
        let Some(target) = located else {
            warn!(reply_id = %reply_id, "delete for unknown reply");
            return MutationOutcome::Ignored;
        };
        let request = self.query.read().await.request();

        confirm_delete(
            &self.list,
            self.notifier.as_ref(),
            reply_id.clone(),
            DeleteMessages {
                success: "Reply deleted successfully".to_string(),
                failure: "Error deleting reply. Please try again later.".to_string(),
                refetch_failure: FETCH_FAILURE_MESSAGE.to_string(),
            },
            self.api.delete_reply(&target),
            async move { self.api.list_replies(&request).await.map(|page| page.items) },
        )
        .await
    }
}

fn target_of(reply: &Reply) -> ReplyTarget {
    ReplyTarget {
        reply_id: reply.id.clone(),
        fragment_id: reply.fragment_id.clone(),
        depth: reply.depth,
        parent_reply_id: reply.parent_reply_id.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::admin_api::{MockAdminApi, Page};
    use crate::application::services::testing::RecordingNotifier;
    use chrono::Utc;

    fn reply(id: &str, status: PublicationStatus, depth: u8) -> Reply {
        Reply {
            id: RecordId::parse(id).unwrap(),
            content: "Lovely piece".to_string(),
            author_id: RecordId::parse("u1").unwrap(),
            author_name: "Morgan Vale".to_string(),
            fragment_id: RecordId::parse("f1").unwrap(),
            fragment_title: "On Mosses".to_string(),
            category_name: Some("Nature".to_string()),
            depth: ReplyDepth::new(depth).unwrap(),
            status,
            parent_reply_id: (depth > 1).then(|| RecordId::parse("r0").unwrap()),
            feedback: None,
            created_at: Utc::now(),
        }
    }

    fn listing() -> ListingConfig {
        ListingConfig {
            page_size: 10,
            search_debounce_ms: 500,
        }
    }

    fn build(api: MockAdminApi) -> (ReplyService, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let service = ReplyService::new(Arc::new(api), notifier.clone(), &listing());
        (service, notifier)
    }

    #[tokio::test]
    async fn blocking_under_default_published_filter_evicts() {
        let mut api = MockAdminApi::new();
        api.expect_list_replies().returning(|request| {
            // The comments page opens filtered to published.
            assert_eq!(request.filters.status, Some(PublicationStatus::Published));
            Ok(Page {
                items: vec![
                    reply("r1", PublicationStatus::Published, 1),
                    reply("r2", PublicationStatus::Published, 2),
                ],
                pages: 1,
            })
        });
        api.expect_set_reply_status()
            .withf(|target, status| {
                target.reply_id.as_str() == "r2"
                    && target.fragment_id.as_str() == "f1"
                    && target.depth.get() == 2
                    && target.parent_reply_id.is_some()
                    && *status == PublicationStatus::Blocked
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let (service, notifier) = build(api);
        service.refresh().await;

        let outcome = service.toggle_status(&RecordId::parse("r2").unwrap()).await;

        assert_eq!(outcome, MutationOutcome::Confirmed);
        let remaining = service.replies().await;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id.as_str(), "r1");
        assert_eq!(
            notifier.taken(),
            vec![(
                NotificationKind::Success,
                "Reply blocked successfully".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn failed_toggle_restores_previous_status_in_place() {
        let mut api = MockAdminApi::new();
        api.expect_list_replies().returning(|_| {
            Ok(Page {
                items: vec![reply("r1", PublicationStatus::Published, 1)],
                pages: 1,
            })
        });
        api.expect_set_reply_status()
            .returning(|_, _| Err(crate::shared::error::AppError::Api("500".to_string())));

        let (service, notifier) = build(api);
        service.refresh().await;

        let outcome = service.toggle_status(&RecordId::parse("r1").unwrap()).await;

        assert_eq!(outcome, MutationOutcome::RolledBack);
        let replies = service.replies().await;
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].status, PublicationStatus::Published);
        assert_eq!(
            notifier.taken(),
            vec![(
                NotificationKind::Error,
                "Error updating reply status".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn delete_carries_the_thread_location() {
        let mut api = MockAdminApi::new();
        api.expect_list_replies().returning(|_| {
            Ok(Page {
                items: vec![reply("r1", PublicationStatus::Published, 3)],
                pages: 1,
            })
        });
        api.expect_delete_reply()
            .withf(|target| {
                target.reply_id.as_str() == "r1" && target.fragment_id.as_str() == "f1"
            })
            .times(1)
            .returning(|_| Ok(()));

        let (service, _notifier) = build(api);
        service.refresh().await;

        let outcome = service.delete(&RecordId::parse("r1").unwrap()).await;

        assert_eq!(outcome, MutationOutcome::Confirmed);
        assert!(service.replies().await.is_empty());
    }

    #[tokio::test]
    async fn depth_filter_change_resets_pagination() {
        let mut api = MockAdminApi::new();
        api.expect_list_replies().returning(|request| {
            if request.filters.depth.is_some() {
                assert_eq!(request.page, 1);
            }
            Ok(Page {
                items: Vec::new(),
                pages: 3,
            })
        });

        let (service, _notifier) = build(api);
        service.refresh().await;
        service.next_page().await;
        assert_eq!(service.page().await, 2);

        service.set_depth(Some(ReplyDepth::new(2).unwrap())).await;

        assert_eq!(service.page().await, 1);
    }
}
