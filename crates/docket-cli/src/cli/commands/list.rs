use super::{exit_codes, parse_priority_filter, parse_status_filter};
use crate::cli::args::ListArgs;
use crate::snapshot;
use anyhow::Result;
use chrono::SecondsFormat;
use docket_core::model::{CaseRecord, CaseStatus, Priority};
use docket_core::query::QuerySpec;
use std::path::Path;

pub fn cmd_list(file: &Path, args: ListArgs) -> Result<i32> {
    let store = snapshot::load_store(file)?;

    let spec = QuerySpec {
        search: args.search.clone(),
        category: Some(args.category.clone()),
        priority: parse_priority_filter(&args.priority)?,
        status: parse_status_filter(&args.status)?,
    };

    let matches = store.query(&spec);

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&matches)?),
        "text" => print_table(&matches, store.len()),
        other => anyhow::bail!("unknown format: {} (expected text | json)", other),
    }

    Ok(exit_codes::OK)
}

fn print_table(records: &[CaseRecord], total: usize) {
    eprintln!("\nTest cases ({} of {})", records.len(), total);
    for r in records {
        let created = r.created_at.to_rfc3339_opts(SecondsFormat::Secs, true);
        eprintln!(
            "{} {} {:<24} {:<24} [{}] {}",
            status_icon(r.status),
            priority_icon(r.priority),
            r.id,
            r.name,
            r.category,
            created
        );
        eprintln!("      in:  {}", preview(&r.input));
        if r.has_expected_output() {
            eprintln!("      out: {}", preview(&r.expected_output));
        } else {
            eprintln!("      out: (no expected output)");
        }
    }
}

fn preview(text: &str) -> String {
    const MAX: usize = 72;
    if text.chars().count() <= MAX {
        text.to_string()
    } else {
        let cut: String = text.chars().take(MAX).collect();
        format!("{}...", cut)
    }
}

fn status_icon(status: CaseStatus) -> &'static str {
    match status {
        CaseStatus::Ready => "✅",
        CaseStatus::NeedsReview => "👁 ",
        CaseStatus::Draft => "⚪",
    }
}

fn priority_icon(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "⚠️ ",
        Priority::Medium => "🟡",
        Priority::Low => "🟢",
    }
}
