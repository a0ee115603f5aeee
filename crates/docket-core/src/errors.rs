use crate::model::{CaseId, CaseStatus};
use serde::{Deserialize, Serialize};

/// Required record fields checked at the creation/ingestion boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Input,
    Category,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Input => "input",
            Field::Category => "category",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Typed failure of a store operation. Operations fail fast: an error means
/// no mutation was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoreError {
    /// A required field was missing or empty.
    Validation { missing: Vec<Field> },
    /// The referenced record does not exist in this store.
    NotFound { id: CaseId },
    /// The record's current status does not permit the operation.
    Transition { id: CaseId, from: CaseStatus },
    /// Restored records contained the same id twice.
    Duplicate { id: CaseId },
}

impl StoreError {
    pub fn not_found(id: &CaseId) -> Self {
        StoreError::NotFound { id: id.clone() }
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Validation { missing } => {
                let names: Vec<&str> = missing.iter().map(Field::as_str).collect();
                write!(f, "missing required fields: {}", names.join(", "))
            }
            StoreError::NotFound { id } => write!(f, "no test case with id '{}'", id),
            StoreError::Transition { id, from } => write!(
                f,
                "test case '{}' cannot be approved from status '{}'",
                id,
                from.as_str()
            ),
            StoreError::Duplicate { id } => {
                write!(f, "duplicate test case id '{}' in restored records", id)
            }
        }
    }
}

impl std::error::Error for StoreError {}
