use crate::errors::StoreError;
use crate::model::{CaseRecord, NewCase, Priority};
use crate::store::CaseStore;
use serde::{Deserialize, Serialize};

/// One externally sourced row, as handed over by a tabular reader. Empty
/// strings mean the column was absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub expected_output: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RejectedRow {
    /// Zero-based position of the row in the input sequence.
    pub index: usize,
    pub row: RawRow,
    pub reason: StoreError,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct IngestReport {
    pub accepted: Vec<CaseRecord>,
    pub rejected: Vec<RejectedRow>,
}

impl IngestReport {
    pub fn all_accepted(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Validates and merges raw rows into the store, one row at a time in
/// input order. A bad row lands in `rejected` with its reason and never
/// aborts the batch; previously accepted rows are not rolled back.
pub fn ingest(store: &mut CaseStore, rows: Vec<RawRow>) -> IngestReport {
    let mut report = IngestReport::default();

    for (index, row) in rows.into_iter().enumerate() {
        let fields = NewCase {
            name: row.name.clone(),
            input: row.input.clone(),
            category: row.category.clone(),
            expected_output: row.expected_output.clone(),
            priority: Priority::parse(&row.priority),
        };

        match store.create(fields) {
            Ok(record) => report.accepted.push(record),
            Err(reason) => {
                tracing::warn!(event = "ingest_row_rejected", index, reason = %reason);
                report.rejected.push(RejectedRow { index, row, reason });
            }
        }
    }

    report
}
