pub mod add;
pub mod approve;
pub mod edit;
pub mod generate;
pub mod import;
pub mod init;
pub mod list;
pub mod rm;
pub mod show;
pub mod stats;

pub mod exit_codes {
    pub const OK: i32 = 0;
    pub const FAILURES: i32 = 1;
    pub const CONFIG_ERROR: i32 = 2;
}

use crate::cli::args::{Cli, Command};
use anyhow::Result;
use docket_core::model::{CaseStatus, Priority};

pub async fn dispatch(cli: Cli) -> Result<i32> {
    match cli.cmd {
        Command::Init(args) => init::cmd_init(&cli.file, args),
        Command::Add(args) => add::cmd_add(&cli.file, args),
        Command::List(args) => list::cmd_list(&cli.file, args),
        Command::Show(args) => show::cmd_show(&cli.file, args),
        Command::Edit(args) => edit::cmd_edit(&cli.file, args),
        Command::Approve(args) => approve::cmd_approve(&cli.file, args),
        Command::Rm(args) => rm::cmd_rm(&cli.file, args),
        Command::Import(args) => import::cmd_import(&cli.file, args),
        Command::Generate(args) => generate::cmd_generate(&cli.file, args).await,
        Command::Stats => stats::cmd_stats(&cli.file),
        Command::Categories => stats::cmd_categories(&cli.file),
    }
}

pub(crate) fn parse_priority_filter(raw: &str) -> Result<Option<Priority>> {
    if raw.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    Priority::parse_exact(raw).map(Some).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown priority filter '{}' (expected low | medium | high | all)",
            raw
        )
    })
}

pub(crate) fn parse_status_filter(raw: &str) -> Result<Option<CaseStatus>> {
    if raw.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    CaseStatus::parse_exact(raw).map(Some).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown status filter '{}' (expected draft | needs_review | ready | all)",
            raw
        )
    })
}
