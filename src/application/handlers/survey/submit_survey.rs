//! SubmitSurveyHandler - Command handler for storing a new submission.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::config::SurveyConfig;
use crate::domain::foundation::{DomainError, SubmissionId, Timestamp, ValidationError};
use crate::domain::survey::{derive_company_name, SubmissionDraft, SurveySubmission};
use crate::ports::SubmissionRepository;

/// Command to store a finished survey submission.
#[derive(Debug, Clone)]
pub struct SubmitSurveyCommand {
    pub draft: SubmissionDraft,
    /// Client address as seen by the server, `"unknown"` when absent.
    pub ip_address: String,
    /// Client user agent, `"unknown"` when absent.
    pub user_agent: String,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitSurveyResult {
    pub id: SubmissionId,
    pub submitted_at: Timestamp,
    pub company_name: String,
    pub redirect_url: String,
}

/// Errors produced while handling a submission.
#[derive(Debug, Error)]
pub enum SubmitSurveyError {
    #[error("Please complete all survey questions before submitting")]
    NoResponses,

    #[error("{0}")]
    InvalidDetails(#[from] ValidationError),

    #[error(
        "Question {question_id}: Points must total exactly 100 \
         for both current and aspirational states"
    )]
    InvalidPointTotals { question_id: u32 },

    #[error(transparent)]
    Storage(#[from] DomainError),
}

/// Handler for storing new submissions.
pub struct SubmitSurveyHandler {
    repository: Arc<dyn SubmissionRepository>,
    config: SurveyConfig,
}

impl SubmitSurveyHandler {
    pub fn new(repository: Arc<dyn SubmissionRepository>, config: SurveyConfig) -> Self {
        Self { repository, config }
    }

    /// Validates the draft, fixes the server-assigned fields, and persists
    /// the record.
    ///
    /// Client validation is never trusted: user details and every question's
    /// point totals are re-checked here before anything is stored. The
    /// company name is derived once from the email domain, falling back to
    /// the free-text company field.
    pub async fn handle(
        &self,
        cmd: SubmitSurveyCommand,
    ) -> Result<SubmitSurveyResult, SubmitSurveyError> {
        cmd.draft.user_details.validate()?;

        if cmd.draft.question_responses.is_empty() {
            return Err(SubmitSurveyError::NoResponses);
        }
        for response in &cmd.draft.question_responses {
            if response.current_state.total() != 100 || response.aspirational_state.total() != 100 {
                return Err(SubmitSurveyError::InvalidPointTotals {
                    question_id: response.question_id,
                });
            }
        }

        let company_name = derive_company_name(&cmd.draft.user_details.email)
            .unwrap_or_else(|| cmd.draft.user_details.company.trim().to_string());

        let submission = SurveySubmission {
            id: SubmissionId::new(),
            user_details: cmd.draft.user_details,
            question_responses: cmd.draft.question_responses,
            completion_time: cmd.draft.completion_time,
            submitted_at: Timestamp::now(),
            ip_address: cmd.ip_address,
            user_agent: cmd.user_agent,
            company_name,
        };

        self.repository.insert(&submission).await?;

        info!(
            submission_id = %submission.id,
            company = %submission.company_name,
            questions = submission.question_responses.len(),
            "survey submission stored"
        );

        Ok(SubmitSurveyResult {
            id: submission.id,
            submitted_at: submission.submitted_at,
            company_name: submission.company_name,
            redirect_url: self.config.redirect_url_for(submission.id),
        })
    }
}
