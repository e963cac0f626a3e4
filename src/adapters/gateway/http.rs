//! HTTP implementation of SubmissionGateway.
//!
//! Posts a finished submission draft to a deployed survey backend and maps
//! its envelope back onto the gateway contract. Validation rejections keep
//! the backend's message verbatim so the form can show it to the respondent.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::survey::SubmissionDraft;
use crate::ports::{GatewayError, SubmissionGateway, SubmissionReceipt};

/// Configuration for the HTTP gateway.
#[derive(Debug, Clone)]
pub struct HttpGatewayConfig {
    /// Base URL of the backend (e.g. `https://pulse.example.com`).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpGatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP gateway posting submissions to the survey backend.
pub struct HttpSubmissionGateway {
    config: HttpGatewayConfig,
    client: Client,
}

impl HttpSubmissionGateway {
    /// Creates a new gateway with the given configuration.
    pub fn new(config: HttpGatewayConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::Transport {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self { config, client })
    }

    fn submit_url(&self) -> String {
        format!("{}/api/surveys", self.config.base_url.trim_end_matches('/'))
    }
}

/// Success envelope returned by the backend.
#[derive(Debug, Deserialize)]
struct SubmitEnvelope {
    data: SubmissionReceipt,
}

/// Failure envelope returned by the backend.
#[derive(Debug, Deserialize)]
struct FailureEnvelope {
    message: String,
}

#[async_trait]
impl SubmissionGateway for HttpSubmissionGateway {
    async fn submit(&self, draft: &SubmissionDraft) -> Result<SubmissionReceipt, GatewayError> {
        let response = self
            .client
            .post(self.submit_url())
            .json(draft)
            .send()
            .await
            .map_err(|e| GatewayError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            let envelope: SubmitEnvelope =
                response.json().await.map_err(|e| GatewayError::Transport {
                    message: format!("Invalid response body: {}", e),
                })?;
            return Ok(envelope.data);
        }

        // 4xx carries the backend's validation message; anything else is
        // treated as a transport-level failure.
        let body = response.text().await.unwrap_or_default();
        if status.is_client_error() {
            let message = serde_json::from_str::<FailureEnvelope>(&body)
                .map(|envelope| envelope.message)
                .unwrap_or_else(|_| format!("Submission rejected ({})", status));
            Err(GatewayError::Rejected { message })
        } else {
            Err(GatewayError::Transport {
                message: format!("Backend returned {}", status),
            })
        }
    }
}
