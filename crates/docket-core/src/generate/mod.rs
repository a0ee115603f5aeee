use crate::model::{CaseId, CasePatch, CaseRecord};
use crate::store::CaseStore;
use anyhow::Context;
use async_trait::async_trait;

pub mod fake;
pub mod openai;

/// External collaborator that produces an expected output for a record.
///
/// Latency, retries and cancellation are the generator's concern; the
/// store is only touched by the final `update` after a generation
/// succeeds.
#[async_trait]
pub trait OutputGenerator: Send + Sync {
    async fn generate(&self, record: &CaseRecord) -> anyhow::Result<String>;
    fn provider_name(&self) -> &'static str;
}

/// Requests a generation for `id` and applies it as an expected-output
/// update, which moves the record to `needs_review`. On generator failure
/// no update occurs and the record keeps its prior status.
pub async fn fill_expected_output(
    store: &mut CaseStore,
    id: &CaseId,
    generator: &dyn OutputGenerator,
) -> anyhow::Result<CaseRecord> {
    let record = store.get(id)?;

    let text = generator.generate(&record).await.with_context(|| {
        format!(
            "{} generation failed for '{}'",
            generator.provider_name(),
            id
        )
    })?;

    tracing::info!(
        event = "output_generated",
        id = %id,
        provider = generator.provider_name(),
        chars = text.len(),
    );

    Ok(store.update(id, CasePatch::expected_output(text))?)
}
