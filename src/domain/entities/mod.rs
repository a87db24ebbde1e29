pub mod author;
pub mod category;
pub mod fragment;
pub mod reply;
pub mod review;
pub mod session;
pub mod stats;
pub mod student;
pub mod subscription;
pub mod user_account;

pub use author::AuthorCredentials;
pub use category::Category;
pub use fragment::{CategoryRef, Fragment};
pub use reply::Reply;
pub use review::{FragmentReviewFeedback, ReplyReviewFeedback, ReviewIssue};
pub use session::{AdminUser, UserType};
pub use stats::DashboardStats;
pub use student::StudentCredentials;
pub use subscription::{RevenuePeriod, Subscription, SubscriptionStats, SubscriptionStatus};
pub use user_account::{CredentialOwner, CredentialSummary, UserAccount, UserDetail, UserRef};

use crate::domain::value_objects::RecordId;

/// Anything held in a record collection the optimistic controller manages.
pub trait Identified {
    fn id(&self) -> &RecordId;
}
