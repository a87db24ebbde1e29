use crate::domain::entities::{
    AdminUser, AuthorCredentials, Category, DashboardStats, Fragment, Reply, StudentCredentials,
    Subscription, SubscriptionStats, SubscriptionStatus, UserAccount, UserDetail,
};
use crate::domain::value_objects::{
    CredentialStatus, FragmentSortKey, PublicationStatus, RecordId, ReplyDepth, ReplySortKey,
    SortOrder,
};
use crate::shared::error::Result;
use async_trait::async_trait;

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pages: u32,
}

/// Full parameter set of a paginated read: pagination plus the resource's
/// current filters, sent together on every fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRequest<F> {
    pub page: u32,
    pub limit: u32,
    pub filters: F,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FragmentFilters {
    pub search: String,
    pub category: Option<RecordId>,
    pub author: Option<RecordId>,
    pub status: Option<PublicationStatus>,
    pub sort_by: FragmentSortKey,
    pub sort_order: SortOrder,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReplyFilters {
    pub search: String,
    pub category: Option<RecordId>,
    pub user: Option<RecordId>,
    pub depth: Option<ReplyDepth>,
    pub status: Option<PublicationStatus>,
    pub sort_by: ReplySortKey,
    pub sort_order: SortOrder,
}

impl Default for ReplyFilters {
    fn default() -> Self {
        // The comments page opens on published comments, newest first.
        Self {
            search: String::new(),
            category: None,
            user: None,
            depth: None,
            status: Some(PublicationStatus::Published),
            sort_by: ReplySortKey::CreatedAt,
            sort_order: SortOrder::Desc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubscriptionFilters {
    pub search: String,
    pub status: Option<SubscriptionStatus>,
}

/// Server-side location of a reply inside its thread. Mutations on replies
/// carry the whole tuple so the server can find the nested document.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyTarget {
    pub reply_id: RecordId,
    pub fragment_id: RecordId,
    pub depth: ReplyDepth,
    pub parent_reply_id: Option<RecordId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModeratorDraft {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Remote resource client for the admin REST API. Session credentials ride on
/// a cookie the implementation manages; callers never see auth material.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminApi: Send + Sync {
    // Session
    async fn fetch_session(&self) -> Result<Option<AdminUser>>;
    async fn login(&self, email: &str, password: &str) -> Result<AdminUser>;
    async fn logout(&self) -> Result<()>;
    async fn register_moderator(&self, draft: &ModeratorDraft) -> Result<()>;

    // Dashboard
    async fn fetch_stats(&self) -> Result<DashboardStats>;

    // Credentials review
    async fn list_authors(&self) -> Result<Vec<AuthorCredentials>>;
    async fn list_students(&self) -> Result<Vec<StudentCredentials>>;
    async fn set_credentials_status(
        &self,
        credentials_id: &RecordId,
        status: CredentialStatus,
    ) -> Result<()>;
    async fn delete_author(&self, credentials_id: &RecordId) -> Result<()>;
    async fn delete_student(&self, credentials_id: &RecordId) -> Result<()>;

    // Accounts
    async fn list_users(&self) -> Result<Vec<UserAccount>>;
    async fn fetch_user(&self, user_id: &RecordId) -> Result<UserDetail>;
    async fn set_user_activation(&self, user_id: &RecordId, active: bool) -> Result<()>;
    async fn delete_user(&self, user_id: &RecordId) -> Result<()>;

    // Categories
    async fn list_categories(&self) -> Result<Vec<Category>>;
    async fn create_category(&self, name: &str) -> Result<()>;
    async fn delete_category(&self, category_id: &RecordId) -> Result<()>;

    // Content
    async fn list_fragments(&self, request: &ListRequest<FragmentFilters>)
        -> Result<Page<Fragment>>;
    async fn set_fragment_status(
        &self,
        fragment_id: &RecordId,
        status: PublicationStatus,
    ) -> Result<()>;
    async fn delete_fragment(&self, fragment_id: &RecordId) -> Result<()>;
    async fn list_replies(&self, request: &ListRequest<ReplyFilters>) -> Result<Page<Reply>>;
    async fn set_reply_status(&self, target: &ReplyTarget, status: PublicationStatus)
        -> Result<()>;
    async fn delete_reply(&self, target: &ReplyTarget) -> Result<()>;

    // Billing
    async fn list_subscriptions(
        &self,
        request: &ListRequest<SubscriptionFilters>,
    ) -> Result<Page<Subscription>>;
    async fn fetch_subscription_stats(&self) -> Result<SubscriptionStats>;
}
