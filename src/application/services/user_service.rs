use super::list_state::ListState;
use super::mutation::{
    confirm_delete, confirm_status, DeleteMessages, MutationOutcome, StatusToggle,
};
use super::FETCH_FAILURE_MESSAGE;
use crate::application::ports::admin_api::{AdminApi, ModeratorDraft};
use crate::application::ports::notifier::{NotificationKind, Notifier};
use crate::domain::entities::{UserAccount, UserDetail};
use crate::domain::value_objects::RecordId;
use rand::Rng;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::error;

const PASSWORD_LENGTH: usize = 10;
const PASSWORD_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Backs the Users page: activation toggles, deletion and moderator creation.
pub struct UserService {
    api: Arc<dyn AdminApi>,
    notifier: Arc<dyn Notifier>,
    list: RwLock<ListState<UserAccount>>,
}

impl UserService {
    pub fn new(api: Arc<dyn AdminApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            list: RwLock::new(ListState::new()),
        }
    }

    pub async fn refresh(&self) -> bool {
        match self.api.list_users().await {
            Ok(users) => {
                self.list.write().await.replace_all(users);
                true
            }
            Err(err) => {
                error!(error = %err, "failed to load users");
                self.notifier
                    .notify(NotificationKind::Error, FETCH_FAILURE_MESSAGE);
                false
            }
        }
    }

    pub async fn users(&self) -> Vec<UserAccount> {
        self.list.read().await.snapshot()
    }

    /// Row whose delete/toggle control should be disabled.
    pub async fn is_busy(&self, user_id: &RecordId) -> bool {
        self.list.read().await.is_in_flight(user_id)
    }

    pub async fn activate(&self, user_id: &RecordId) -> MutationOutcome {
        self.set_activation(
            user_id,
            true,
            "User activated successfully",
            "Error while activating user, please try again later",
        )
        .await
    }

    pub async fn deactivate(&self, user_id: &RecordId) -> MutationOutcome {
        self.set_activation(
            user_id,
            false,
            "User deactivated successfully",
            "Error while deactivating user, please try again later",
        )
        .await
    }

    async fn set_activation(
        &self,
        user_id: &RecordId,
        active: bool,
        success: &str,
        failure: &str,
    ) -> MutationOutcome {
        confirm_status(
            &self.list,
            self.notifier.as_ref(),
            StatusToggle {
                record_id: user_id.clone(),
                new_value: active,
                read: |u: &UserAccount| u.active,
                write: |u, active| u.active = active,
                success_message: success.to_string(),
                failure_message: failure.to_string(),
            },
            self.api.set_user_activation(user_id, active),
            |_: &UserAccount| false,
        )
        .await
    }

    pub async fn delete(&self, user_id: &RecordId) -> MutationOutcome {
        confirm_delete(
            &self.list,
            self.notifier.as_ref(),
            user_id.clone(),
            DeleteMessages {
                success: "User deleted successfully".to_string(),
                failure: "Error deleting user. Please try again later.".to_string(),
                refetch_failure: FETCH_FAILURE_MESSAGE.to_string(),
            },
            self.api.delete_user(user_id),
            self.api.list_users(),
        )
        .await
    }

    /// Create a moderator account and reload the listing so the new row shows
    /// up with its server-assigned fields.
    pub async fn create_moderator(&self, draft: ModeratorDraft) -> bool {
        match self.api.register_moderator(&draft).await {
            Ok(()) => {
                self.notifier
                    .notify(NotificationKind::Success, "Moderator created successfully!");
                self.refresh().await;
                true
            }
            Err(err) => {
                error!(error = %err, "failed to create moderator");
                self.notifier
                    .notify(NotificationKind::Error, "Error creating user.");
                false
            }
        }
    }

    pub async fn user_detail(&self, user_id: &RecordId) -> Option<UserDetail> {
        match self.api.fetch_user(user_id).await {
            Ok(detail) => Some(detail),
            Err(err) => {
                error!(user_id = %user_id, error = %err, "failed to load user detail");
                self.notifier
                    .notify(NotificationKind::Error, "Failed to fetch user details.");
                None
            }
        }
    }

    /// Throwaway initial password for a new moderator.
    pub fn generate_password() -> String {
        let mut rng = rand::thread_rng();
        (0..PASSWORD_LENGTH)
            .map(|_| PASSWORD_CHARSET[rng.gen_range(0..PASSWORD_CHARSET.len())] as char)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::admin_api::MockAdminApi;
    use crate::application::services::testing::RecordingNotifier;
    use crate::domain::entities::UserType;
    use crate::shared::error::AppError;
    use chrono::Utc;

    fn user(id: &str, active: bool) -> UserAccount {
        UserAccount {
            id: RecordId::parse(id).unwrap(),
            name: "Morgan Vale".to_string(),
            email: "morgan@example.com".to_string(),
            user_type: UserType::Student,
            active,
            is_deleted: false,
            avatar: None,
            followers: Vec::new(),
            following: Vec::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn build(api: MockAdminApi) -> (UserService, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let service = UserService::new(Arc::new(api), notifier.clone());
        (service, notifier)
    }

    #[tokio::test]
    async fn deactivate_rolls_back_active_flag_on_failure() {
        let mut api = MockAdminApi::new();
        api.expect_list_users()
            .returning(|| Ok(vec![user("u1", true)]));
        api.expect_set_user_activation()
            .withf(|id, active| id.as_str() == "u1" && !active)
            .returning(|_, _| Err(AppError::Api("500".to_string())));

        let (service, notifier) = build(api);
        service.refresh().await;

        let outcome = service.deactivate(&RecordId::parse("u1").unwrap()).await;

        assert_eq!(outcome, MutationOutcome::RolledBack);
        assert!(service.users().await[0].active);
        assert_eq!(
            notifier.taken(),
            vec![(
                NotificationKind::Error,
                "Error while deactivating user, please try again later".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn activate_applies_immediately_and_confirms() {
        let mut api = MockAdminApi::new();
        api.expect_list_users()
            .returning(|| Ok(vec![user("u1", false)]));
        api.expect_set_user_activation()
            .withf(|id, active| id.as_str() == "u1" && *active)
            .times(1)
            .returning(|_, _| Ok(()));

        let (service, notifier) = build(api);
        service.refresh().await;

        let outcome = service.activate(&RecordId::parse("u1").unwrap()).await;

        assert_eq!(outcome, MutationOutcome::Confirmed);
        assert!(service.users().await[0].active);
        assert_eq!(
            notifier.taken(),
            vec![(
                NotificationKind::Success,
                "User activated successfully".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn create_moderator_reloads_listing_on_success() {
        let mut api = MockAdminApi::new();
        api.expect_register_moderator()
            .withf(|draft| draft.email == "new@example.com")
            .times(1)
            .returning(|_| Ok(()));
        api.expect_list_users()
            .times(1)
            .returning(|| Ok(vec![user("u9", true)]));

        let (service, notifier) = build(api);

        let created = service
            .create_moderator(ModeratorDraft {
                name: "New Mod".to_string(),
                email: "new@example.com".to_string(),
                password: UserService::generate_password(),
            })
            .await;

        assert!(created);
        assert_eq!(service.users().await.len(), 1);
        assert_eq!(
            notifier.taken(),
            vec![(
                NotificationKind::Success,
                "Moderator created successfully!".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn user_detail_failure_notifies_and_returns_none() {
        let mut api = MockAdminApi::new();
        api.expect_fetch_user()
            .returning(|_| Err(AppError::NotFound("no such user".to_string())));

        let (service, notifier) = build(api);

        let detail = service.user_detail(&RecordId::parse("ghost").unwrap()).await;

        assert!(detail.is_none());
        assert_eq!(
            notifier.taken(),
            vec![(
                NotificationKind::Error,
                "Failed to fetch user details.".to_string()
            )]
        );
    }

    #[test]
    fn generated_passwords_are_ten_lowercase_alphanumerics() {
        for _ in 0..20 {
            let password = UserService::generate_password();
            assert_eq!(password.len(), PASSWORD_LENGTH);
            assert!(password
                .bytes()
                .all(|b| PASSWORD_CHARSET.contains(&b)));
        }
    }
}
