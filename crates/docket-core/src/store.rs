use crate::errors::{Field, StoreError};
use crate::ident::IdAllocator;
use crate::model::{CaseId, CasePatch, CaseRecord, CaseStatus, NewCase};
use crate::query::QuerySpec;
use chrono::Utc;
use std::collections::HashSet;

/// Owning, insertion-ordered collection of test cases for one session.
///
/// Mutations take `&mut self`; an embedder running multiple writers must
/// serialize access to one store instance. Reads observe a consistent
/// snapshot and never a half-applied mutation.
#[derive(Debug, Default)]
pub struct CaseStore {
    ident: IdAllocator,
    records: Vec<CaseRecord>,
}

impl CaseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrates a store from previously persisted records, preserving
    /// their ids and order. The allocator is seeded past every restored id.
    pub fn from_records(records: Vec<CaseRecord>) -> Result<Self, StoreError> {
        let ident = IdAllocator::new();
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.clone()) {
                return Err(StoreError::Duplicate {
                    id: record.id.clone(),
                });
            }
            ident.seed_past(&record.id);
        }
        Ok(Self { ident, records })
    }

    pub fn create(&mut self, fields: NewCase) -> Result<CaseRecord, StoreError> {
        let mut missing = Vec::new();
        if fields.name.trim().is_empty() {
            missing.push(Field::Name);
        }
        if fields.input.trim().is_empty() {
            missing.push(Field::Input);
        }
        if fields.category.trim().is_empty() {
            missing.push(Field::Category);
        }
        if !missing.is_empty() {
            return Err(StoreError::Validation { missing });
        }

        let record = CaseRecord {
            id: self.ident.next(),
            name: fields.name,
            input: fields.input,
            expected_output: fields.expected_output,
            category: fields.category,
            priority: fields.priority,
            // Every creation path starts at draft, even when the caller
            // already supplied an expected output.
            status: CaseStatus::Draft,
            created_at: Utc::now(),
        };
        tracing::debug!(event = "case_created", id = %record.id, category = %record.category);
        self.records.push(record.clone());
        Ok(record)
    }

    /// Applies a partial update. A patch carrying `expected_output` sends
    /// the record to `needs_review`; other fields leave status untouched.
    /// Patches may not blank a required field.
    pub fn update(&mut self, id: &CaseId, patch: CasePatch) -> Result<CaseRecord, StoreError> {
        let idx = self.position(id)?;

        let mut missing = Vec::new();
        if patch.name.as_deref().is_some_and(|s| s.trim().is_empty()) {
            missing.push(Field::Name);
        }
        if patch.input.as_deref().is_some_and(|s| s.trim().is_empty()) {
            missing.push(Field::Input);
        }
        if patch.category.as_deref().is_some_and(|s| s.trim().is_empty()) {
            missing.push(Field::Category);
        }
        if !missing.is_empty() {
            return Err(StoreError::Validation { missing });
        }

        let record = &mut self.records[idx];
        if let Some(name) = patch.name {
            record.name = name;
        }
        if let Some(input) = patch.input {
            record.input = input;
        }
        if let Some(category) = patch.category {
            record.category = category;
        }
        if let Some(priority) = patch.priority {
            record.priority = priority;
        }
        if let Some(expected) = patch.expected_output {
            record.expected_output = expected;
            // Edited output always goes back through review, including on
            // a previously approved record.
            record.status = CaseStatus::NeedsReview;
        }
        Ok(record.clone())
    }

    /// External review approval, the only path to `ready`.
    pub fn approve(&mut self, id: &CaseId) -> Result<CaseRecord, StoreError> {
        let idx = self.position(id)?;
        let record = &mut self.records[idx];
        if record.status != CaseStatus::NeedsReview {
            return Err(StoreError::Transition {
                id: id.clone(),
                from: record.status,
            });
        }
        record.status = CaseStatus::Ready;
        tracing::debug!(event = "case_approved", id = %record.id);
        Ok(record.clone())
    }

    /// Removes and returns the record. Deliberately not idempotent:
    /// deleting the same id twice fails the second time.
    pub fn delete(&mut self, id: &CaseId) -> Result<CaseRecord, StoreError> {
        let idx = self.position(id)?;
        let removed = self.records.remove(idx);
        tracing::debug!(event = "case_deleted", id = %removed.id);
        Ok(removed)
    }

    pub fn get(&self, id: &CaseId) -> Result<CaseRecord, StoreError> {
        let idx = self.position(id)?;
        Ok(self.records[idx].clone())
    }

    /// All records in insertion order. The returned snapshot is detached
    /// from later mutations.
    pub fn list(&self) -> Vec<CaseRecord> {
        self.records.clone()
    }

    pub fn records(&self) -> &[CaseRecord] {
        &self.records
    }

    /// Matching records in insertion order.
    pub fn query(&self, spec: &QuerySpec) -> Vec<CaseRecord> {
        self.records
            .iter()
            .filter(|r| spec.matches(r))
            .cloned()
            .collect()
    }

    /// Sorted, deduplicated category labels across all records.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> =
            self.records.iter().map(|r| r.category.clone()).collect();
        categories.sort();
        categories.dedup();
        categories
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: &CaseId) -> Result<usize, StoreError> {
        self.records
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| StoreError::not_found(id))
    }
}
