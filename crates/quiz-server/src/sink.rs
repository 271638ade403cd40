//! Outbound delivery for accepted lead submissions.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("webhook request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("webhook returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Downstream receiver for lead submissions. Delivery happens after the
/// respondent already got their response, so failures are logged, never
/// surfaced to the client.
#[async_trait]
pub trait LeadSink: Send + Sync {
    async fn deliver(&self, submission: &Value) -> Result<(), SinkError>;
}

/// POSTs each submission as JSON to a configured webhook.
pub struct WebhookSink {
    client: reqwest::Client,
    url: String,
}

impl WebhookSink {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait]
impl LeadSink for WebhookSink {
    async fn deliver(&self, submission: &Value) -> Result<(), SinkError> {
        let response = self.client.post(&self.url).json(submission).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SinkError::Status(status));
        }
        Ok(())
    }
}

/// Fallback used when no webhook is configured: submissions only land in
/// the server log.
pub struct LogSink;

#[async_trait]
impl LeadSink for LogSink {
    async fn deliver(&self, submission: &Value) -> Result<(), SinkError> {
        tracing::info!(submission = %submission, "lead recorded (no webhook configured)");
        Ok(())
    }
}
