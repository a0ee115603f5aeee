use super::exit_codes;
use crate::cli::args::ApproveArgs;
use crate::snapshot;
use anyhow::Result;
use docket_core::errors::StoreError;
use docket_core::model::CaseId;
use std::path::Path;

pub fn cmd_approve(file: &Path, args: ApproveArgs) -> Result<i32> {
    let mut store = snapshot::load_store(file)?;
    let id = CaseId::new(args.id);

    match store.approve(&id) {
        Ok(record) => {
            snapshot::save_store(file, &store)?;
            eprintln!("✅ Approved '{}' (status: ready)", record.name);
            Ok(exit_codes::OK)
        }
        Err(e @ (StoreError::NotFound { .. } | StoreError::Transition { .. })) => {
            eprintln!("❌ {}", e);
            Ok(exit_codes::CONFIG_ERROR)
        }
        Err(e) => Err(e.into()),
    }
}
