//! Wire envelopes and request bodies for the admin REST API. The list
//! endpoints are inconsistent about their envelopes (categories come back as
//! a bare array, everything else is wrapped), so each one gets its own type.

use crate::domain::entities::{
    AdminUser, AuthorCredentials, Fragment, Reply, StudentCredentials, Subscription, UserAccount,
};
use crate::domain::value_objects::{RecordId, ReplyDepth};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SessionEnvelope {
    #[serde(default)]
    pub user: Option<AdminUser>,
}

#[derive(Debug, Deserialize)]
pub struct AuthorsEnvelope {
    pub authors: Vec<AuthorCredentials>,
}

#[derive(Debug, Deserialize)]
pub struct StudentsEnvelope {
    pub students: Vec<StudentCredentials>,
}

#[derive(Debug, Deserialize)]
pub struct UsersEnvelope {
    pub users: Vec<UserAccount>,
}

#[derive(Debug, Deserialize)]
pub struct FragmentsEnvelope {
    pub fragments: Vec<Fragment>,
    pub pages: u32,
}

#[derive(Debug, Deserialize)]
pub struct RepliesEnvelope {
    pub replies: Vec<Reply>,
    pub pages: u32,
}

#[derive(Debug, Deserialize)]
pub struct SubscriptionsEnvelope {
    pub subscriptions: Vec<Subscription>,
    pub pages: u32,
}

#[derive(Debug, Serialize)]
pub struct LoginBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterBody<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsStatusBody<'a> {
    pub credentials_id: &'a RecordId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserActivationBody<'a> {
    pub user_id: &'a RecordId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FragmentStatusBody<'a> {
    pub fragment_id: &'a RecordId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyStatusBody<'a> {
    pub fragment_id: &'a RecordId,
    pub reply_id: &'a RecordId,
    pub depth: ReplyDepth,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_reply_id: Option<&'a RecordId>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyDeleteBody<'a> {
    pub fragment_id: &'a RecordId,
}

#[derive(Debug, Serialize)]
pub struct CategoryBody<'a> {
    pub name: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_status_body_omits_missing_parent() {
        let fragment_id = RecordId::parse("f1").unwrap();
        let reply_id = RecordId::parse("r1").unwrap();
        let body = ReplyStatusBody {
            fragment_id: &fragment_id,
            reply_id: &reply_id,
            depth: ReplyDepth::new(1).unwrap(),
            parent_reply_id: None,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"fragmentId": "f1", "replyId": "r1", "depth": 1})
        );
    }

    #[test]
    fn credentials_body_uses_camel_case() {
        let id = RecordId::parse("cred9").unwrap();
        let json = serde_json::to_value(CredentialsStatusBody {
            credentials_id: &id,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"credentialsId": "cred9"}));
    }

    #[test]
    fn categories_come_back_as_bare_array() {
        let parsed: Vec<crate::domain::entities::Category> = serde_json::from_str(
            r#"[{"_id": "c1", "name": "Nature", "slug": "nature", "color": "green"}]"#,
        )
        .unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "Nature");
    }

    #[test]
    fn replies_envelope_parses_denormalized_rows() {
        let parsed: RepliesEnvelope = serde_json::from_str(
            r#"{
                "replies": [{
                    "_id": "r1",
                    "content": "Lovely piece",
                    "authorId": "u1",
                    "authorName": "Morgan Vale",
                    "fragmentId": "f1",
                    "fragmentTitle": "On Mosses",
                    "categoryName": "Nature",
                    "depth": 2,
                    "status": "published",
                    "parentReplyId": "r0",
                    "createdAt": "2025-04-01T10:00:00Z"
                }],
                "pages": 7
            }"#,
        )
        .unwrap();

        assert_eq!(parsed.pages, 7);
        let reply = &parsed.replies[0];
        assert_eq!(reply.depth.get(), 2);
        assert_eq!(reply.parent_reply_id.as_ref().unwrap().as_str(), "r0");
    }
}
