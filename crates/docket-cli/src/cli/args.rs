use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "docket",
    version,
    about = "Test-case manager for chatbot evaluation suites"
)]
pub struct Cli {
    /// Docket file holding the managed test cases
    #[arg(
        long,
        global = true,
        default_value = "docket.json",
        env = "DOCKET_FILE"
    )]
    pub file: PathBuf,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a docket file seeded with sample cases
    Init(InitArgs),
    /// Add a single test case
    Add(AddArgs),
    /// List test cases, optionally filtered
    List(ListArgs),
    /// Show one test case by id
    Show(ShowArgs),
    /// Edit fields of a test case
    Edit(EditArgs),
    /// Approve a reviewed test case (needs_review -> ready)
    Approve(ApproveArgs),
    /// Delete a test case
    Rm(RmArgs),
    /// Import test cases from a rows file (.csv, .tsv, .json, .yaml)
    Import(ImportArgs),
    /// Generate an expected output for a test case
    Generate(GenerateArgs),
    /// Show counts by status, priority and category
    Stats,
    /// List distinct category labels
    Categories,
}

#[derive(clap::Args, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite an existing docket file
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct AddArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub category: String,

    /// low | medium | high
    #[arg(long, default_value = "medium")]
    pub priority: String,

    #[arg(long, default_value = "")]
    pub input: String,

    /// Leave empty to generate later
    #[arg(long, default_value = "")]
    pub expected: String,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ListArgs {
    /// Substring match against name, input, expected output and category
    #[arg(long)]
    pub search: Option<String>,

    /// Category label, or "all"
    #[arg(long, default_value = "all")]
    pub category: String,

    /// low | medium | high | all
    #[arg(long, default_value = "all")]
    pub priority: String,

    /// draft | needs_review | ready | all
    #[arg(long, default_value = "all")]
    pub status: String,

    /// text | json
    #[arg(long, default_value = "text")]
    pub format: String,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ShowArgs {
    pub id: String,
}

#[derive(clap::Args, Debug, Clone)]
pub struct EditArgs {
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    /// low | medium | high
    #[arg(long)]
    pub priority: Option<String>,

    #[arg(long)]
    pub input: Option<String>,

    /// Saving an expected output sends the case back to review
    #[arg(long)]
    pub expected: Option<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ApproveArgs {
    pub id: String,
}

#[derive(clap::Args, Debug, Clone)]
pub struct RmArgs {
    pub id: String,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ImportArgs {
    /// Rows file (.csv, .tsv, .json, .yaml)
    pub input: PathBuf,

    /// csv | tsv | json | yaml (default: by file extension)
    #[arg(long)]
    pub format: Option<String>,

    /// Validate and report without saving
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    pub id: String,

    /// fake | openai
    #[arg(long, default_value = "fake", env = "DOCKET_GENERATOR")]
    pub generator: String,

    /// Model identifier for the live generator
    #[arg(long, default_value = "gpt-4o-mini", env = "DOCKET_GENERATOR_MODEL")]
    pub model: String,

    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL for an OpenAI-compatible endpoint
    #[arg(long, env = "DOCKET_GENERATOR_BASE_URL")]
    pub base_url: Option<String>,
}
