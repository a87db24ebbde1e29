use super::error::ApiError;
use super::wire::{
    AuthorsEnvelope, CategoryBody, CredentialsStatusBody, FragmentStatusBody, FragmentsEnvelope,
    LoginBody, RegisterBody, RepliesEnvelope, ReplyDeleteBody, ReplyStatusBody, SessionEnvelope,
    StudentsEnvelope, SubscriptionsEnvelope, UserActivationBody, UsersEnvelope,
};
use crate::application::ports::admin_api::{
    AdminApi, FragmentFilters, ListRequest, ModeratorDraft, Page, ReplyFilters, ReplyTarget,
    SubscriptionFilters,
};
use crate::domain::entities::{
    AdminUser, AuthorCredentials, Category, DashboardStats, Fragment, Reply, StudentCredentials,
    Subscription, SubscriptionStats, UserAccount, UserDetail,
};
use crate::domain::value_objects::{CredentialStatus, PublicationStatus, RecordId};
use crate::shared::config::ApiConfig;
use crate::shared::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP implementation of the admin API port. Auth is a session cookie the
/// client's cookie store carries between requests, matching how the browser
/// dashboard talks to the same endpoints.
pub struct HttpAdminApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpAdminApi {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let trimmed = config.base_url.trim();
        if trimmed.is_empty() {
            return Err(AppError::ConfigurationError(
                "API base_url is empty".to_string(),
            ));
        }
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.request_timeout))
            .build()
            .map_err(|err| AppError::ConfigurationError(err.to_string()))?;
        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        self.http.request(method, url)
    }
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> std::result::Result<T, ApiError> {
    let status = resp.status();
    let body = resp.text().await.map_err(ApiError::Transport)?;
    if !status.is_success() {
        return Err(ApiError::Status { status, body });
    }
    serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()))
}

async fn ensure_success(resp: reqwest::Response) -> std::result::Result<(), ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(());
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status { status, body })
}

fn fragment_params(request: &ListRequest<FragmentFilters>) -> Vec<(&'static str, String)> {
    let filters = &request.filters;
    let mut params = vec![
        ("page", request.page.to_string()),
        ("limit", request.limit.to_string()),
        ("search", filters.search.clone()),
        ("sortBy", filters.sort_by.wire_name().to_string()),
        ("sortOrder", filters.sort_order.as_str().to_string()),
    ];
    if let Some(category) = &filters.category {
        params.push(("category", category.to_string()));
    }
    if let Some(author) = &filters.author {
        params.push(("author", author.to_string()));
    }
    if let Some(status) = filters.status {
        params.push(("status", status.as_str().to_string()));
    }
    params
}

fn reply_params(request: &ListRequest<ReplyFilters>) -> Vec<(&'static str, String)> {
    let filters = &request.filters;
    let mut params = vec![
        ("page", request.page.to_string()),
        ("limit", request.limit.to_string()),
        ("search", filters.search.clone()),
        ("sortBy", filters.sort_by.wire_name().to_string()),
        ("sortOrder", filters.sort_order.as_str().to_string()),
    ];
    if let Some(category) = &filters.category {
        params.push(("category", category.to_string()));
    }
    if let Some(user) = &filters.user {
        params.push(("user", user.to_string()));
    }
    if let Some(depth) = filters.depth {
        params.push(("depth", depth.to_string()));
    }
    if let Some(status) = filters.status {
        params.push(("status", status.as_str().to_string()));
    }
    params
}

fn subscription_params(request: &ListRequest<SubscriptionFilters>) -> Vec<(&'static str, String)> {
    let filters = &request.filters;
    let mut params = vec![
        ("page", request.page.to_string()),
        ("limit", request.limit.to_string()),
    ];
    if let Some(status) = filters.status {
        params.push(("status", status.as_str().to_string()));
    }
    if !filters.search.is_empty() {
        params.push(("search", filters.search.clone()));
    }
    params
}

#[async_trait]
impl AdminApi for HttpAdminApi {
    async fn fetch_session(&self) -> Result<Option<AdminUser>> {
        let resp = self
            .request(Method::GET, "/admin/session")
            .send()
            .await
            .map_err(ApiError::Transport)?;
        // No session cookie yet is a normal state, not an error.
        if resp.status() == StatusCode::UNAUTHORIZED {
            return Ok(None);
        }
        let envelope: SessionEnvelope = decode(resp).await?;
        Ok(envelope.user)
    }

    async fn login(&self, email: &str, password: &str) -> Result<AdminUser> {
        let resp = self
            .request(Method::POST, "/admin/login")
            .json(&LoginBody { email, password })
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let envelope: SessionEnvelope = decode(resp).await?;
        envelope
            .user
            .ok_or_else(|| AppError::Auth("login response carried no user".to_string()))
    }

    async fn logout(&self) -> Result<()> {
        let resp = self
            .request(Method::POST, "/auth/logout")
            .send()
            .await
            .map_err(ApiError::Transport)?;
        ensure_success(resp).await?;
        Ok(())
    }

    async fn register_moderator(&self, draft: &ModeratorDraft) -> Result<()> {
        let resp = self
            .request(Method::POST, "/admin/register")
            .json(&RegisterBody {
                name: &draft.name,
                email: &draft.email,
                password: &draft.password,
            })
            .send()
            .await
            .map_err(ApiError::Transport)?;
        ensure_success(resp).await?;
        Ok(())
    }

    async fn fetch_stats(&self) -> Result<DashboardStats> {
        let resp = self
            .request(Method::GET, "/admin/stats")
            .send()
            .await
            .map_err(ApiError::Transport)?;
        Ok(decode(resp).await?)
    }

    async fn list_authors(&self) -> Result<Vec<AuthorCredentials>> {
        let resp = self
            .request(Method::GET, "/admin/authors")
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let envelope: AuthorsEnvelope = decode(resp).await?;
        Ok(envelope.authors)
    }

    async fn list_students(&self) -> Result<Vec<StudentCredentials>> {
        let resp = self
            .request(Method::GET, "/admin/students")
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let envelope: StudentsEnvelope = decode(resp).await?;
        Ok(envelope.students)
    }

    async fn set_credentials_status(
        &self,
        credentials_id: &RecordId,
        status: CredentialStatus,
    ) -> Result<()> {
        let resp = self
            .request(
                Method::POST,
                &format!("/admin/credentials-status/{}", status.as_str()),
            )
            .json(&CredentialsStatusBody { credentials_id })
            .send()
            .await
            .map_err(ApiError::Transport)?;
        ensure_success(resp).await?;
        Ok(())
    }

    async fn delete_author(&self, credentials_id: &RecordId) -> Result<()> {
        let resp = self
            .request(Method::DELETE, &format!("/admin/authors/{credentials_id}"))
            .send()
            .await
            .map_err(ApiError::Transport)?;
        ensure_success(resp).await?;
        Ok(())
    }

    async fn delete_student(&self, credentials_id: &RecordId) -> Result<()> {
        let resp = self
            .request(Method::DELETE, &format!("/admin/students/{credentials_id}"))
            .send()
            .await
            .map_err(ApiError::Transport)?;
        ensure_success(resp).await?;
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<UserAccount>> {
        let resp = self
            .request(Method::GET, "/admin/users")
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let envelope: UsersEnvelope = decode(resp).await?;
        Ok(envelope.users)
    }

    async fn fetch_user(&self, user_id: &RecordId) -> Result<UserDetail> {
        let resp = self
            .request(Method::GET, &format!("/admin/users/{user_id}"))
            .send()
            .await
            .map_err(ApiError::Transport)?;
        Ok(decode(resp).await?)
    }

    async fn set_user_activation(&self, user_id: &RecordId, active: bool) -> Result<()> {
        let path = if active {
            "/admin/users/active"
        } else {
            "/admin/users/inactive"
        };
        let resp = self
            .request(Method::POST, path)
            .json(&UserActivationBody { user_id })
            .send()
            .await
            .map_err(ApiError::Transport)?;
        ensure_success(resp).await?;
        Ok(())
    }

    async fn delete_user(&self, user_id: &RecordId) -> Result<()> {
        let resp = self
            .request(Method::DELETE, &format!("/admin/users/{user_id}"))
            .send()
            .await
            .map_err(ApiError::Transport)?;
        ensure_success(resp).await?;
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        let resp = self
            .request(Method::GET, "/admin/categories")
            .send()
            .await
            .map_err(ApiError::Transport)?;
        Ok(decode(resp).await?)
    }

    async fn create_category(&self, name: &str) -> Result<()> {
        let resp = self
            .request(Method::POST, "/admin/categories")
            .json(&CategoryBody { name })
            .send()
            .await
            .map_err(ApiError::Transport)?;
        ensure_success(resp).await?;
        Ok(())
    }

    async fn delete_category(&self, category_id: &RecordId) -> Result<()> {
        let resp = self
            .request(Method::DELETE, &format!("/admin/categories/{category_id}"))
            .send()
            .await
            .map_err(ApiError::Transport)?;
        ensure_success(resp).await?;
        Ok(())
    }

    async fn list_fragments(
        &self,
        request: &ListRequest<FragmentFilters>,
    ) -> Result<Page<Fragment>> {
        let resp = self
            .request(Method::GET, "/admin/fragments")
            .query(&fragment_params(request))
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let envelope: FragmentsEnvelope = decode(resp).await?;
        Ok(Page {
            items: envelope.fragments,
            pages: envelope.pages,
        })
    }

    async fn set_fragment_status(
        &self,
        fragment_id: &RecordId,
        status: PublicationStatus,
    ) -> Result<()> {
        let resp = self
            .request(
                Method::POST,
                &format!("/admin/fragments/{}", status.as_str()),
            )
            .json(&FragmentStatusBody { fragment_id })
            .send()
            .await
            .map_err(ApiError::Transport)?;
        ensure_success(resp).await?;
        Ok(())
    }

    async fn delete_fragment(&self, fragment_id: &RecordId) -> Result<()> {
        let resp = self
            .request(Method::DELETE, &format!("/admin/fragments/{fragment_id}"))
            .send()
            .await
            .map_err(ApiError::Transport)?;
        ensure_success(resp).await?;
        Ok(())
    }

    async fn list_replies(&self, request: &ListRequest<ReplyFilters>) -> Result<Page<Reply>> {
        let resp = self
            .request(Method::GET, "/admin/comments")
            .query(&reply_params(request))
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let envelope: RepliesEnvelope = decode(resp).await?;
        Ok(Page {
            items: envelope.replies,
            pages: envelope.pages,
        })
    }

    async fn set_reply_status(
        &self,
        target: &ReplyTarget,
        status: PublicationStatus,
    ) -> Result<()> {
        let resp = self
            .request(Method::POST, &format!("/admin/replies/{}", status.as_str()))
            .json(&ReplyStatusBody {
                fragment_id: &target.fragment_id,
                reply_id: &target.reply_id,
                depth: target.depth,
                parent_reply_id: target.parent_reply_id.as_ref(),
            })
            .send()
            .await
            .map_err(ApiError::Transport)?;
        ensure_success(resp).await?;
        Ok(())
    }

    async fn delete_reply(&self, target: &ReplyTarget) -> Result<()> {
        let resp = self
            .request(
                Method::DELETE,
                &format!("/admin/replies/{}", target.reply_id),
            )
            .json(&ReplyDeleteBody {
                fragment_id: &target.fragment_id,
            })
            .send()
            .await
            .map_err(ApiError::Transport)?;
        ensure_success(resp).await?;
        Ok(())
    }

    async fn list_subscriptions(
        &self,
        request: &ListRequest<SubscriptionFilters>,
    ) -> Result<Page<Subscription>> {
        let resp = self
            .request(Method::GET, "/admin/subscriptions")
            .query(&subscription_params(request))
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let envelope: SubscriptionsEnvelope = decode(resp).await?;
        Ok(Page {
            items: envelope.subscriptions,
            pages: envelope.pages,
        })
    }

    async fn fetch_subscription_stats(&self) -> Result<SubscriptionStats> {
        let resp = self
            .request(Method::GET, "/admin/subscriptions/stats")
            .send()
            .await
            .map_err(ApiError::Transport)?;
        Ok(decode(resp).await?)
    }
}
