use super::user_account::CredentialOwner;
use super::Identified;
use crate::domain::value_objects::{CredentialStatus, RecordId};
use serde::{Deserialize, Serialize};

/// A student's credentials submission, reviewed from the Students page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentCredentials {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub name: String,
    #[serde(rename = "userId", default)]
    pub owner: Option<CredentialOwner>,
    #[serde(default)]
    pub credentials: Option<String>,
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub expertise: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    pub status: CredentialStatus,
}

impl StudentCredentials {
    pub fn is_settled(&self) -> bool {
        self.status != CredentialStatus::Pending
    }
}

impl Identified for StudentCredentials {
    fn id(&self) -> &RecordId {
        &self.id
    }
}
