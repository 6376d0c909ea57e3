//! Stand-in sink that logs each submission

use super::traits::SubmissionSink;
use crate::state::FormData;
use anyhow::Result;
use async_trait::async_trait;

/// Writes each payload to the log as JSON
#[derive(Debug, Default)]
pub struct LogSink {
    submitted: usize,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubmissionSink for LogSink {
    async fn submit(&mut self, data: &FormData) -> Result<()> {
        let payload = serde_json::to_string(data)?;
        self.submitted += 1;
        tracing::info!(submission = self.submitted, %payload, "Contact form submitted");
        Ok(())
    }
}
