use crate::domain::value_objects::RecordId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Student,
    Author,
    Admin,
    Moderator,
}

/// The signed-in dashboard operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
}

impl AdminUser {
    /// Admins can create moderators and delete accounts; moderators cannot.
    pub fn is_admin(&self) -> bool {
        self.user_type == UserType::Admin
    }
}
