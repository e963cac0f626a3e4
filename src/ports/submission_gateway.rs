//! Submission gateway port (client-side submit seam).
//!
//! The multi-step form hands its finished session to this gateway. The
//! production implementation posts to a deployed backend over HTTP; tests
//! and embedded setups can satisfy it in process.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{SubmissionId, Timestamp};
use crate::domain::survey::SubmissionDraft;

/// Gateway port accepting a validated submission draft.
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Submit the draft, returning the stored record's receipt.
    ///
    /// # Errors
    ///
    /// - `Rejected` when the backend refuses the payload (validation)
    /// - `Transport` when the backend is unreachable or misbehaves
    async fn submit(&self, draft: &SubmissionDraft) -> Result<SubmissionReceipt, GatewayError>;
}

/// What the backend returns for a stored submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub id: SubmissionId,
    pub submitted_at: Timestamp,
    pub company_name: String,
    /// Post-submission redirect target; carried through the submit result
    /// so the caller decides how to navigate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
}

/// Failures crossing the gateway seam.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The backend understood the request and said no.
    #[error("{message}")]
    Rejected { message: String },

    /// Network or backend failure; original message kept for diagnostics.
    #[error("Network error occurred: {message}")]
    Transport { message: String },
}
