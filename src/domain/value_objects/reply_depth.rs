use serde::{Deserialize, Serialize};
use std::fmt;

pub const MAX_REPLY_DEPTH: u8 = 3;

/// Nesting level of a reply. The platform threads comments three levels deep.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReplyDepth(u8);

impl ReplyDepth {
    pub fn new(value: u8) -> Result<Self, String> {
        if value == 0 || value > MAX_REPLY_DEPTH {
            return Err(format!(
                "Reply depth must be between 1 and {}",
                MAX_REPLY_DEPTH
            ));
        }
        Ok(Self(value))
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    pub fn is_top_level(&self) -> bool {
        self.0 == 1
    }
}

impl fmt::Display for ReplyDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_threading_range() {
        for depth in 1..=MAX_REPLY_DEPTH {
            assert!(ReplyDepth::new(depth).is_ok());
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(ReplyDepth::new(0).is_err());
        assert!(ReplyDepth::new(4).is_err());
    }
}
