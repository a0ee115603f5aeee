use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque record identifier. Assigned by the store at creation and never
/// reused within one store instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseId(String);

impl CaseId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Lossy parse used at the ingestion boundary: empty or unrecognized
    /// values fall back to `Medium`.
    pub fn parse(s: &str) -> Self {
        Self::parse_exact(s).unwrap_or_default()
    }

    pub fn parse_exact(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// Lifecycle stage of a record's expected-output readiness.
///
/// `draft -> needs_review -> ready`, forward only. Output edits on a
/// `needs_review` or `ready` record re-enter `needs_review`; nothing ever
/// returns a record to `draft`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    #[default]
    Draft,
    NeedsReview,
    Ready,
}

impl CaseStatus {
    pub fn parse_exact(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "draft" => Some(CaseStatus::Draft),
            "needs_review" => Some(CaseStatus::NeedsReview),
            "ready" => Some(CaseStatus::Ready),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Draft => "draft",
            CaseStatus::NeedsReview => "needs_review",
            CaseStatus::Ready => "ready",
        }
    }
}

/// One test case: an input for the bot under evaluation plus the reviewed
/// expected output and its classification metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseRecord {
    pub id: CaseId,
    pub name: String,
    pub input: String,
    #[serde(default)]
    pub expected_output: String,
    pub category: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: CaseStatus,
    pub created_at: DateTime<Utc>,
}

impl CaseRecord {
    pub fn has_expected_output(&self) -> bool {
        !self.expected_output.trim().is_empty()
    }
}

/// Caller-supplied fields for a direct create. `name`, `input` and
/// `category` must be non-empty; everything else is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCase {
    pub name: String,
    pub input: String,
    #[serde(default)]
    pub expected_output: String,
    pub category: String,
    #[serde(default)]
    pub priority: Priority,
}

/// Partial field update. `status` is deliberately absent: it only moves
/// through the defined store operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CasePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl CasePatch {
    pub fn expected_output(text: impl Into<String>) -> Self {
        Self {
            expected_output: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.input.is_none()
            && self.expected_output.is_none()
            && self.category.is_none()
            && self.priority.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_parse_is_case_insensitive_with_medium_fallback() {
        assert_eq!(Priority::parse("HIGH"), Priority::High);
        assert_eq!(Priority::parse(" low "), Priority::Low);
        assert_eq!(Priority::parse("urgent"), Priority::Medium);
        assert_eq!(Priority::parse(""), Priority::Medium);
        assert_eq!(Priority::parse_exact("urgent"), None);
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&CaseStatus::NeedsReview).unwrap();
        assert_eq!(json, "\"needs_review\"");

        let back: CaseStatus = serde_json::from_str("\"ready\"").unwrap();
        assert_eq!(back, CaseStatus::Ready);
        assert_eq!(CaseStatus::parse_exact("needs_review"), Some(CaseStatus::NeedsReview));
        assert_eq!(CaseStatus::parse_exact("done"), None);
    }

    #[test]
    fn patch_emptiness() {
        assert!(CasePatch::default().is_empty());
        assert!(!CasePatch::expected_output("text").is_empty());
    }
}
