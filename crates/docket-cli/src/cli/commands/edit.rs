use super::exit_codes;
use crate::cli::args::EditArgs;
use crate::snapshot;
use anyhow::Result;
use docket_core::errors::StoreError;
use docket_core::model::{CaseId, CasePatch, Priority};
use std::path::Path;

pub fn cmd_edit(file: &Path, args: EditArgs) -> Result<i32> {
    let mut store = snapshot::load_store(file)?;
    let id = CaseId::new(args.id);

    let priority = match args.priority.as_deref() {
        Some(raw) => match Priority::parse_exact(raw) {
            Some(p) => Some(p),
            None => {
                eprintln!("unknown priority '{}' (expected low | medium | high)", raw);
                return Ok(exit_codes::CONFIG_ERROR);
            }
        },
        None => None,
    };

    let patch = CasePatch {
        name: args.name,
        input: args.input,
        category: args.category,
        expected_output: args.expected,
        priority,
    };

    if patch.is_empty() {
        eprintln!(
            "nothing to edit (pass at least one of --name/--category/--priority/--input/--expected)"
        );
        return Ok(exit_codes::CONFIG_ERROR);
    }

    match store.update(&id, patch) {
        Ok(record) => {
            snapshot::save_store(file, &store)?;
            eprintln!(
                "✅ Updated '{}' (status: {})",
                record.name,
                record.status.as_str()
            );
            Ok(exit_codes::OK)
        }
        Err(e @ (StoreError::NotFound { .. } | StoreError::Validation { .. })) => {
            eprintln!("❌ {}", e);
            Ok(exit_codes::CONFIG_ERROR)
        }
        Err(e) => Err(e.into()),
    }
}
