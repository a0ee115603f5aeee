use anyhow::{Context, Result};
use docket_core::ingest::RawRow;
use std::path::Path;

mod delimited;

/// Reads a rows file into the shape the ingestion pipeline expects. The
/// format is taken from `format` when given, otherwise from the file
/// extension.
pub fn read_rows(path: &Path, format: Option<&str>) -> Result<Vec<RawRow>> {
    let format = match format {
        Some(f) => f.to_ascii_lowercase(),
        None => path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase(),
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read rows file: {}", path.display()))?;

    match format.as_str() {
        "csv" => delimited::parse(&text, ','),
        "tsv" => delimited::parse(&text, '\t'),
        "json" => serde_json::from_str(&text)
            .context("failed to parse JSON rows (expected an array of row objects)"),
        "yaml" | "yml" => serde_yaml::from_str(&text)
            .context("failed to parse YAML rows (expected a sequence of row mappings)"),
        other => anyhow::bail!(
            "unknown rows format: '{}' (expected csv | tsv | json | yaml)",
            other
        ),
    }
}
