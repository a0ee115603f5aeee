use crate::model::{CaseRecord, CaseStatus, Priority};
use serde::{Deserialize, Serialize};

/// Sentinel accepted by the category filter meaning "no constraint".
pub const ALL: &str = "all";

/// Filter configuration over a store. Every field is independently
/// optional; the filters that are present combine with logical AND.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuerySpec {
    /// Case-insensitive substring matched against name, input, expected
    /// output and category; a record matches if any of the four contains
    /// the needle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CaseStatus>,
}

impl QuerySpec {
    pub fn matches(&self, record: &CaseRecord) -> bool {
        if let Some(needle) = self.search.as_deref() {
            if !search_matches(record, needle) {
                return false;
            }
        }
        if let Some(category) = self.category.as_deref() {
            if category != ALL && record.category != category {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if record.priority != priority {
                return false;
            }
        }
        if let Some(status) = self.status {
            if record.status != status {
                return false;
            }
        }
        true
    }
}

fn search_matches(record: &CaseRecord, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    [
        record.name.as_str(),
        record.input.as_str(),
        record.expected_output.as_str(),
        record.category.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}
