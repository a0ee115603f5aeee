use anyhow::{Context, Result};
use docket_core::model::CaseRecord;
use docket_core::store::CaseStore;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

pub const SNAPSHOT_VERSION: u32 = 1;

/// On-disk form of a docket: a versioned list of cases. The core store is
/// memory-only; this file is the CLI's persistence collaborator.
#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub cases: Vec<CaseRecord>,
}

pub fn load_store(path: &Path) -> Result<CaseStore> {
    let file = File::open(path).with_context(|| {
        format!(
            "failed to open docket file: {} (run `docket init` first?)",
            path.display()
        )
    })?;
    let snapshot: Snapshot = serde_json::from_reader(file)
        .with_context(|| format!("failed to parse docket file: {}", path.display()))?;

    if snapshot.version != SNAPSHOT_VERSION {
        anyhow::bail!(
            "unsupported docket file version {} (supported: {})",
            snapshot.version,
            SNAPSHOT_VERSION
        );
    }

    let store = CaseStore::from_records(snapshot.cases)
        .with_context(|| format!("invalid docket file: {}", path.display()))?;
    Ok(store)
}

pub fn save_store(path: &Path, store: &CaseStore) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)
        .with_context(|| format!("failed to write docket file: {}", path.display()))?;

    let snapshot = Snapshot {
        version: SNAPSHOT_VERSION,
        cases: store.list(),
    };
    // Pretty print for git diffability
    serde_json::to_writer_pretty(file, &snapshot).context("failed to serialize docket file")?;
    Ok(())
}
