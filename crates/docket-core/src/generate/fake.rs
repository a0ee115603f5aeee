use super::OutputGenerator;
use crate::model::CaseRecord;
use async_trait::async_trait;
use std::time::Duration;

/// Deterministic generator for tests and offline demos. Optionally sleeps
/// to mimic a real model call.
#[derive(Debug, Default)]
pub struct FakeGenerator {
    latency: Option<Duration>,
}

impl FakeGenerator {
    pub fn instant() -> Self {
        Self { latency: None }
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency: Some(latency),
        }
    }
}

#[async_trait]
impl OutputGenerator for FakeGenerator {
    async fn generate(&self, record: &CaseRecord) -> anyhow::Result<String> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        Ok(format!(
            "Generated response for: \"{}\". This is a simulated expected output that would be contextually appropriate for the input provided.",
            record.input
        ))
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}
