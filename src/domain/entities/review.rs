use serde::{Deserialize, Serialize};

/// One flagged dimension of an automated moderation review.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewIssue {
    #[serde(default)]
    pub flagged: bool,
    #[serde(default)]
    pub similarity_score: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub matches: Vec<String>,
    #[serde(default)]
    pub phrases: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl ReviewIssue {
    /// Plagiarism checks report a similarity score instead of a hard flag;
    /// scores above 0.5 count as flagged.
    pub fn needs_attention(&self) -> bool {
        self.flagged || self.similarity_score.map_or(false, |score| score > 0.5)
    }
}

/// Review payload attached to a fragment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FragmentReviewFeedback {
    #[serde(default)]
    pub misinformation: Option<ReviewIssue>,
    #[serde(default)]
    pub unethical: Option<ReviewIssue>,
    #[serde(default)]
    pub plagiarism: Option<ReviewIssue>,
    #[serde(default)]
    pub abusive: Option<ReviewIssue>,
}

impl FragmentReviewFeedback {
    pub fn has_findings(&self) -> bool {
        [
            &self.misinformation,
            &self.unethical,
            &self.plagiarism,
            &self.abusive,
        ]
        .iter()
        .any(|issue| issue.as_ref().map_or(false, ReviewIssue::needs_attention))
    }
}

/// Review payload attached to a reply.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyReviewFeedback {
    #[serde(default)]
    pub abusive: Option<ReviewIssue>,
    #[serde(default)]
    pub harsh_tone: Option<ReviewIssue>,
    #[serde(default)]
    pub misinformation: Option<ReviewIssue>,
    #[serde(default)]
    pub spam: Option<ReviewIssue>,
    #[serde(default)]
    pub unethical: Option<ReviewIssue>,
}

impl ReplyReviewFeedback {
    pub fn has_findings(&self) -> bool {
        [
            &self.abusive,
            &self.harsh_tone,
            &self.misinformation,
            &self.spam,
            &self.unethical,
        ]
        .iter()
        .any(|issue| issue.as_ref().map_or(false, ReviewIssue::needs_attention))
    }
}
