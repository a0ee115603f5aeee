use super::exit_codes;
use crate::cli::args::InitArgs;
use crate::snapshot;
use anyhow::Result;
use docket_core::model::{NewCase, Priority};
use docket_core::store::CaseStore;
use std::path::Path;

pub fn cmd_init(file: &Path, args: InitArgs) -> Result<i32> {
    if file.exists() && !args.force {
        eprintln!(
            "{} already exists (use --force to overwrite)",
            file.display()
        );
        return Ok(exit_codes::CONFIG_ERROR);
    }

    let mut store = CaseStore::new();
    store.create(NewCase {
        name: "Customer Support Query".into(),
        input: "I need help with my order #12345. It hasn't arrived yet.".into(),
        expected_output: "I understand you're concerned about order #12345. Let me check the status for you. Can you please provide your email address associated with the order?".into(),
        category: "Customer Support".into(),
        priority: Priority::High,
    })?;
    store.create(NewCase {
        name: "Technical Question".into(),
        input: "How do I reset my password?".into(),
        expected_output: "To reset your password: 1) Go to the login page 2) Click 'Forgot Password' 3) Enter your email 4) Check your inbox for reset instructions 5) Follow the link to create a new password".into(),
        category: "Technical".into(),
        priority: Priority::Medium,
    })?;

    snapshot::save_store(file, &store)?;
    eprintln!(
        "✅ Created {} with {} sample cases",
        file.display(),
        store.len()
    );
    Ok(exit_codes::OK)
}
