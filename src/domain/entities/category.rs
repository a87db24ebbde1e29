use super::Identified;
use crate::domain::value_objects::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Palette the platform assigns category colors from.
pub const CATEGORY_COLORS: &[&str] = &[
    "red", "orange", "amber", "yellow", "lime", "green", "emerald", "teal", "cyan", "sky", "blue",
    "indigo", "violet", "purple", "fuchsia", "pink", "rose", "slate", "gray", "zinc", "neutral",
    "stone",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Category {
    pub fn has_known_color(&self) -> bool {
        match &self.color {
            Some(color) => CATEGORY_COLORS.contains(&color.as_str()),
            None => false,
        }
    }
}

impl Identified for Category {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_color_check() {
        let mut category = Category {
            id: RecordId::parse("c1").unwrap(),
            name: "History".to_string(),
            slug: Some("history".to_string()),
            color: Some("teal".to_string()),
            created_at: None,
        };
        assert!(category.has_known_color());

        category.color = Some("chartreuse".to_string());
        assert!(!category.has_known_color());

        category.color = None;
        assert!(!category.has_known_color());
    }
}
