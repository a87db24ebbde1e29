use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Opaque identifier the server assigns to every record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(value: String) -> Result<Self, String> {
        Self::validate(&value)?;
        Ok(Self(value))
    }

    pub fn parse(value: &str) -> Result<Self, String> {
        Self::validate(value)?;
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            return Err("Record ID cannot be empty".to_string());
        }
        Ok(())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl FromStr for RecordId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_ids() {
        assert!(RecordId::parse("").is_err());
        assert!(RecordId::parse("   ").is_err());
    }

    #[test]
    fn round_trips_through_display() {
        let id = RecordId::parse("66f0a1b2c3").unwrap();
        assert_eq!(id.to_string(), "66f0a1b2c3");
        assert_eq!(id.as_str(), "66f0a1b2c3");
    }
}
