use serde::{Deserialize, Serialize};
use std::fmt;

/// Moderation state of a fragment or reply.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicationStatus {
    Published,
    Blocked,
}

impl PublicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PublicationStatus::Published => "published",
            PublicationStatus::Blocked => "blocked",
        }
    }

    pub fn toggled(&self) -> PublicationStatus {
        match self {
            PublicationStatus::Published => PublicationStatus::Blocked,
            PublicationStatus::Blocked => PublicationStatus::Published,
        }
    }
}

impl fmt::Display for PublicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggled_flips_both_ways() {
        assert_eq!(
            PublicationStatus::Published.toggled(),
            PublicationStatus::Blocked
        );
        assert_eq!(
            PublicationStatus::Blocked.toggled(),
            PublicationStatus::Published
        );
    }
}
