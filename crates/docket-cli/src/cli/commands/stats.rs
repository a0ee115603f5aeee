use super::exit_codes;
use crate::snapshot;
use anyhow::Result;
use std::collections::BTreeMap;
use std::path::Path;

pub fn cmd_stats(file: &Path) -> Result<i32> {
    let store = snapshot::load_store(file)?;
    let records = store.records();

    let mut by_status: BTreeMap<&str, usize> = BTreeMap::new();
    let mut by_priority: BTreeMap<&str, usize> = BTreeMap::new();
    let mut by_category: BTreeMap<&str, usize> = BTreeMap::new();
    for r in records {
        *by_status.entry(r.status.as_str()).or_default() += 1;
        *by_priority.entry(r.priority.as_str()).or_default() += 1;
        *by_category.entry(r.category.as_str()).or_default() += 1;
    }

    eprintln!("\n{} test cases", records.len());

    eprintln!("\nBy status:");
    for (label, count) in &by_status {
        eprintln!("  {:<14} {}", label, count);
    }

    eprintln!("\nBy priority:");
    for (label, count) in &by_priority {
        eprintln!("  {:<14} {}", label, count);
    }

    eprintln!("\nBy category:");
    for (label, count) in &by_category {
        eprintln!("  {:<24} {}", label, count);
    }

    Ok(exit_codes::OK)
}

pub fn cmd_categories(file: &Path) -> Result<i32> {
    let store = snapshot::load_store(file)?;
    for category in store.categories() {
        println!("{}", category);
    }
    Ok(exit_codes::OK)
}
