pub mod credential_status;
pub mod publication_status;
pub mod record_id;
pub mod reply_depth;
pub mod sort;

pub use credential_status::CredentialStatus;
pub use publication_status::PublicationStatus;
pub use record_id::RecordId;
pub use reply_depth::ReplyDepth;
pub use sort::{FragmentSortKey, ReplySortKey, SortOrder};
