use super::review::FragmentReviewFeedback;
use super::user_account::UserRef;
use super::Identified;
use crate::domain::value_objects::{PublicationStatus, RecordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category reference embedded in a fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub name: String,
}

/// A published article ("fragment") as listed on the Fragments page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fragment {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub title: String,
    pub author: UserRef,
    pub category: CategoryRef,
    pub status: PublicationStatus,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub upvotes: Vec<RecordId>,
    #[serde(default)]
    pub downvotes: Vec<RecordId>,
    #[serde(default)]
    pub replies: Vec<RecordId>,
    #[serde(default)]
    pub view_count: Option<u64>,
    #[serde(default)]
    pub subscription_count: u64,
    /// Verdict of the automated moderation pass, when one ran.
    #[serde(default)]
    pub ai_status: Option<String>,
    #[serde(default)]
    pub ai_review: Option<FragmentReviewFeedback>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Fragment {
    pub fn upvote_count(&self) -> usize {
        self.upvotes.len()
    }

    pub fn reply_count(&self) -> usize {
        self.replies.len()
    }
}

impl Identified for Fragment {
    fn id(&self) -> &RecordId {
        &self.id
    }
}
