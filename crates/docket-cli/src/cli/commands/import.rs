use super::exit_codes;
use crate::cli::args::ImportArgs;
use crate::rows;
use crate::snapshot;
use anyhow::Result;
use docket_core::{ingest, report};
use std::path::Path;

pub fn cmd_import(file: &Path, args: ImportArgs) -> Result<i32> {
    let mut store = snapshot::load_store(file)?;

    let parsed = rows::read_rows(&args.input, args.format.as_deref())?;
    eprintln!("Parsed {} rows from {}", parsed.len(), args.input.display());

    let report = ingest::ingest(&mut store, parsed);
    report::print_ingest_summary(&report, &args.input.display().to_string());

    if args.dry_run {
        eprintln!("(dry run: docket file left untouched)");
    } else if !report.accepted.is_empty() {
        snapshot::save_store(file, &store)?;
    }

    if report.all_accepted() {
        Ok(exit_codes::OK)
    } else {
        Ok(exit_codes::FAILURES)
    }
}
