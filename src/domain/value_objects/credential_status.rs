use serde::{Deserialize, Serialize};
use std::fmt;

/// Review state of an author or student credentials submission.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialStatus {
    Pending,
    Approved,
    Rejected,
}

impl CredentialStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialStatus::Pending => "pending",
            CredentialStatus::Approved => "approved",
            CredentialStatus::Rejected => "rejected",
        }
    }

    /// The review controls only offer transitions away from the current state:
    /// a pending submission can go either way, an approved one can only be
    /// rejected and vice versa.
    pub fn can_transition_to(&self, next: CredentialStatus) -> bool {
        next != CredentialStatus::Pending && next != *self
    }
}

impl fmt::Display for CredentialStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_can_go_either_way() {
        assert!(CredentialStatus::Pending.can_transition_to(CredentialStatus::Approved));
        assert!(CredentialStatus::Pending.can_transition_to(CredentialStatus::Rejected));
    }

    #[test]
    fn settled_states_only_flip() {
        assert!(!CredentialStatus::Approved.can_transition_to(CredentialStatus::Approved));
        assert!(CredentialStatus::Approved.can_transition_to(CredentialStatus::Rejected));
        assert!(!CredentialStatus::Rejected.can_transition_to(CredentialStatus::Pending));
    }
}
