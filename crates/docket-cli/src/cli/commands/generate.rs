use super::exit_codes;
use crate::cli::args::GenerateArgs;
use crate::snapshot;
use anyhow::Result;
use docket_core::errors::StoreError;
use docket_core::generate::fake::FakeGenerator;
use docket_core::generate::openai::OpenAiGenerator;
use docket_core::generate::{fill_expected_output, OutputGenerator};
use docket_core::model::CaseId;
use std::path::Path;

pub async fn cmd_generate(file: &Path, args: GenerateArgs) -> Result<i32> {
    let mut store = snapshot::load_store(file)?;
    let id = CaseId::new(args.id);

    let generator: Box<dyn OutputGenerator> = match args.generator.as_str() {
        "fake" => Box::new(FakeGenerator::instant()),
        "openai" => {
            let api_key = args.api_key.ok_or_else(|| {
                anyhow::anyhow!("--api-key or OPENAI_API_KEY is required for the openai generator")
            })?;
            let mut generator = OpenAiGenerator::new(api_key, args.model);
            if let Some(base_url) = args.base_url {
                generator = generator.with_base_url(base_url);
            }
            Box::new(generator)
        }
        other => anyhow::bail!("unknown generator: {} (expected fake | openai)", other),
    };

    match fill_expected_output(&mut store, &id, generator.as_ref()).await {
        Ok(record) => {
            snapshot::save_store(file, &store)?;
            eprintln!(
                "✅ Generated expected output for '{}' (status: {})",
                record.name,
                record.status.as_str()
            );
            Ok(exit_codes::OK)
        }
        Err(e) => {
            if let Some(store_err) = e.downcast_ref::<StoreError>() {
                eprintln!("❌ {}", store_err);
                return Ok(exit_codes::CONFIG_ERROR);
            }
            // A failed generation never touches the docket file.
            eprintln!("❌ {:#}", e);
            Ok(exit_codes::FAILURES)
        }
    }
}
