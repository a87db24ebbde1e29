use super::user_account::CredentialOwner;
use super::Identified;
use crate::domain::value_objects::{CredentialStatus, RecordId};
use serde::{Deserialize, Serialize};

/// An author's credentials submission, reviewed from the Authors page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorCredentials {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub name: String,
    /// Account the submission belongs to; the listing shows its email.
    #[serde(rename = "userId", default)]
    pub owner: Option<CredentialOwner>,
    /// Free-text qualification line.
    #[serde(default)]
    pub credentials: Option<String>,
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub expertise: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    /// Download URL for the uploaded credentials document.
    #[serde(default)]
    pub file: Option<String>,
    pub status: CredentialStatus,
}

impl AuthorCredentials {
    pub fn is_settled(&self) -> bool {
        self.status != CredentialStatus::Pending
    }
}

impl Identified for AuthorCredentials {
    fn id(&self) -> &RecordId {
        &self.id
    }
}
