use super::session::UserType;
use super::Identified;
use crate::domain::value_objects::{CredentialStatus, RecordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimal reference to another user, as embedded in follower lists and
/// fragment author fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub name: String,
}

/// Account embedded in a credentials record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialOwner {
    #[serde(rename = "_id")]
    pub id: RecordId,
    #[serde(default)]
    pub email: Option<String>,
}

/// A platform account as listed on the Users page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub active: bool,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub followers: Vec<UserRef>,
    #[serde(default)]
    pub following: Vec<UserRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserAccount {
    pub fn follower_count(&self) -> usize {
        self.followers.len()
    }

    pub fn following_count(&self) -> usize {
        self.following.len()
    }
}

impl Identified for UserAccount {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Credentials block attached to the user-detail view when the account has a
/// submission on file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialSummary {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub expertise: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub file: Option<String>,
    pub status: CredentialStatus,
}

/// Response of the user-detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDetail {
    pub user: UserAccount,
    #[serde(default)]
    pub credentials: Option<CredentialSummary>,
}
