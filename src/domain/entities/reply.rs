use super::review::ReplyReviewFeedback;
use super::Identified;
use crate::domain::value_objects::{PublicationStatus, RecordId, ReplyDepth};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A threaded comment as listed on the Comments page. The listing is
/// denormalized: the server joins in author, fragment and category names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub content: String,
    pub author_id: RecordId,
    pub author_name: String,
    pub fragment_id: RecordId,
    pub fragment_title: String,
    #[serde(default)]
    pub category_name: Option<String>,
    pub depth: ReplyDepth,
    pub status: PublicationStatus,
    #[serde(default)]
    pub parent_reply_id: Option<RecordId>,
    #[serde(default)]
    pub feedback: Option<ReplyReviewFeedback>,
    pub created_at: DateTime<Utc>,
}

impl Identified for Reply {
    fn id(&self) -> &RecordId {
        &self.id
    }
}
