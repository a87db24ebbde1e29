use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Sort keys the fragments listing accepts.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FragmentSortKey {
    #[default]
    CreatedAt,
    Views,
    Upvotes,
}

impl FragmentSortKey {
    pub fn wire_name(&self) -> &'static str {
        match self {
            FragmentSortKey::CreatedAt => "createdAt",
            FragmentSortKey::Views => "views",
            FragmentSortKey::Upvotes => "upvotes",
        }
    }
}

/// Sort keys the comments listing accepts.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReplySortKey {
    #[default]
    CreatedAt,
    Depth,
}

impl ReplySortKey {
    pub fn wire_name(&self) -> &'static str {
        match self {
            ReplySortKey::CreatedAt => "createdAt",
            ReplySortKey::Depth => "depth",
        }
    }
}
