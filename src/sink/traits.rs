//! Trait abstraction for the submission destination to enable mocking in tests

use crate::state::FormData;
use anyhow::Result;
use async_trait::async_trait;

/// Receives a form submission once every visible field is valid
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Deliver the payload. An error leaves the form untouched so it can be retried.
    async fn submit(&mut self, data: &FormData) -> Result<()>;
}
