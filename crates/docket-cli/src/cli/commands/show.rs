use super::exit_codes;
use crate::cli::args::ShowArgs;
use crate::snapshot;
use anyhow::Result;
use docket_core::errors::StoreError;
use docket_core::model::CaseId;
use std::path::Path;

pub fn cmd_show(file: &Path, args: ShowArgs) -> Result<i32> {
    let store = snapshot::load_store(file)?;
    let id = CaseId::new(args.id);

    match store.get(&id) {
        Ok(record) => {
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(exit_codes::OK)
        }
        Err(e @ StoreError::NotFound { .. }) => {
            eprintln!("❌ {}", e);
            Ok(exit_codes::CONFIG_ERROR)
        }
        Err(e) => Err(e.into()),
    }
}
