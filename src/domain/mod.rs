pub mod entities;
pub mod value_objects;

pub use entities::Identified;
pub use value_objects::{
    CredentialStatus, PublicationStatus, RecordId, ReplyDepth, SortOrder,
};
