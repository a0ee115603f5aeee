use crate::ingest::IngestReport;

/// Prints a per-row import report to stderr.
pub fn print_ingest_summary(report: &IngestReport, source: &str) {
    eprintln!("\nImporting rows from {}...", source);

    for record in &report.accepted {
        eprintln!("✅ {:<24} {} [{}]", record.id, record.name, record.category);
    }
    for reject in &report.rejected {
        let label = if reject.row.name.trim().is_empty() {
            "(unnamed row)"
        } else {
            reject.row.name.as_str()
        };
        eprintln!("❌ row {:<3} {}: {}", reject.index + 1, label, reject.reason);
    }

    eprintln!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    eprintln!(
        "Summary: {} imported, {} rejected",
        report.accepted.len(),
        report.rejected.len()
    );
}
