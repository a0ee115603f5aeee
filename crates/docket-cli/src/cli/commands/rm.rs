use super::exit_codes;
use crate::cli::args::RmArgs;
use crate::snapshot;
use anyhow::Result;
use docket_core::errors::StoreError;
use docket_core::model::CaseId;
use std::path::Path;

pub fn cmd_rm(file: &Path, args: RmArgs) -> Result<i32> {
    let mut store = snapshot::load_store(file)?;
    let id = CaseId::new(args.id);

    match store.delete(&id) {
        Ok(removed) => {
            snapshot::save_store(file, &store)?;
            eprintln!("✅ Deleted '{}' ({})", removed.name, removed.id);
            Ok(exit_codes::OK)
        }
        Err(e @ StoreError::NotFound { .. }) => {
            eprintln!("❌ {}", e);
            Ok(exit_codes::CONFIG_ERROR)
        }
        Err(e) => Err(e.into()),
    }
}
