use super::exit_codes;
use crate::cli::args::AddArgs;
use crate::snapshot;
use anyhow::Result;
use docket_core::errors::StoreError;
use docket_core::model::{NewCase, Priority};
use std::path::Path;

pub fn cmd_add(file: &Path, args: AddArgs) -> Result<i32> {
    let mut store = snapshot::load_store(file)?;

    let priority = match Priority::parse_exact(&args.priority) {
        Some(p) => p,
        None => {
            eprintln!(
                "unknown priority '{}' (expected low | medium | high)",
                args.priority
            );
            return Ok(exit_codes::CONFIG_ERROR);
        }
    };

    let created = store.create(NewCase {
        name: args.name,
        input: args.input,
        category: args.category,
        expected_output: args.expected,
        priority,
    });

    match created {
        Ok(record) => {
            snapshot::save_store(file, &store)?;
            eprintln!("✅ Added '{}' ({})", record.name, record.id);
            Ok(exit_codes::OK)
        }
        Err(e @ StoreError::Validation { .. }) => {
            eprintln!("❌ {}", e);
            Ok(exit_codes::CONFIG_ERROR)
        }
        Err(e) => Err(e.into()),
    }
}
