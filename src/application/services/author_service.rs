use super::list_state::ListState;
use super::mutation::{
    confirm_delete, confirm_status, DeleteMessages, MutationOutcome, StatusToggle,
};
use super::FETCH_FAILURE_MESSAGE;
use crate::application::ports::admin_api::AdminApi;
use crate::application::ports::notifier::{NotificationKind, Notifier};
use crate::domain::entities::AuthorCredentials;
use crate::domain::value_objects::{CredentialStatus, RecordId};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::error;

/// Backs the Authors page: credentials review with approve/reject.
pub struct AuthorService {
    api: Arc<dyn AdminApi>,
    notifier: Arc<dyn Notifier>,
    list: RwLock<ListState<AuthorCredentials>>,
}

impl AuthorService {
    pub fn new(api: Arc<dyn AdminApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            list: RwLock::new(ListState::new()),
        }
    }

    /// Bulk reload. A failure leaves the previous listing visible.
    pub async fn refresh(&self) -> bool {
        match self.api.list_authors().await {
            Ok(authors) => {
                self.list.write().await.replace_all(authors);
                true
            }
            Err(err) => {
                error!(error = %err, "failed to load authors");
                self.notifier
                    .notify(NotificationKind::Error, FETCH_FAILURE_MESSAGE);
                false
            }
        }
    }

    pub async fn authors(&self) -> Vec<AuthorCredentials> {
        self.list.read().await.snapshot()
    }

    pub async fn is_busy(&self, credentials_id: &RecordId) -> bool {
        self.list.read().await.is_in_flight(credentials_id)
    }

    pub async fn approve(&self, credentials_id: &RecordId) -> MutationOutcome {
        self.review(
            credentials_id,
            CredentialStatus::Approved,
            "Author approved successfully",
            "Error while approving author, please try again later",
        )
        .await
    }

    pub async fn reject(&self, credentials_id: &RecordId) -> MutationOutcome {
        self.review(
            credentials_id,
            CredentialStatus::Rejected,
            "Author rejected successfully",
            "Error while rejecting author, please try again later",
        )
        .await
    }

    async fn review(
        &self,
        credentials_id: &RecordId,
        status: CredentialStatus,
        success: &str,
        failure: &str,
    ) -> MutationOutcome {
        confirm_status(
            &self.list,
            self.notifier.as_ref(),
            StatusToggle {
                record_id: credentials_id.clone(),
                new_value: status,
                read: |a: &AuthorCredentials| a.status,
                write: |a, status| a.status = status,
                success_message: success.to_string(),
                failure_message: failure.to_string(),
            },
            self.api.set_credentials_status(credentials_id, status),
            // The authors listing is unfiltered, nothing falls out of view.
            |_: &AuthorCredentials| false,
        )
        .await
    }

    pub async fn delete(&self, credentials_id: &RecordId) -> MutationOutcome {
        confirm_delete(
            &self.list,
            self.notifier.as_ref(),
            credentials_id.clone(),
            DeleteMessages {
                success: "Author deleted successfully".to_string(),
                failure: "Error deleting author. Please try again later.".to_string(),
                refetch_failure: FETCH_FAILURE_MESSAGE.to_string(),
            },
            self.api.delete_author(credentials_id),
            self.api.list_authors(),
        )
        .await
    }
}
