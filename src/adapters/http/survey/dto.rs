//! HTTP DTOs for the survey endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent
//! evolution. Every body, success or failure, is JSON in camelCase.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::survey::{QuestionResponse, SubmissionSummary, SurveySubmission, UserDetails};
use crate::ports::Pagination;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request body for storing a submission.
///
/// The top-level fields are optional so their absence maps to the uniform
/// missing-fields message instead of a serde rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitSurveyRequest {
    pub user_details: Option<UserDetails>,
    pub question_responses: Option<Vec<QuestionResponse>>,
    #[serde(default)]
    pub completion_time: u64,
}

/// Query parameters for the listing endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQueryParams {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Envelope for successful responses carrying data.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl<T> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
            pagination: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }
}

/// Body of a successful submission, echoing the server-assigned fields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitSurveyResponse {
    pub id: String,
    pub submitted_at: String,
    pub company_name: String,
    pub redirect_url: String,
}

/// Full submission as returned by the detail and company endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResponseDto {
    pub id: String,
    pub user_details: UserDetails,
    pub question_responses: Vec<QuestionResponse>,
    pub completion_time: u64,
    pub submitted_at: String,
    pub company_name: String,
}

impl From<SurveySubmission> for SurveyResponseDto {
    fn from(submission: SurveySubmission) -> Self {
        Self {
            id: submission.id.to_string(),
            user_details: submission.user_details,
            question_responses: submission.question_responses,
            completion_time: submission.completion_time,
            submitted_at: submission.submitted_at.as_datetime().to_rfc3339(),
            company_name: submission.company_name,
        }
    }
}

/// Listing summary row.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveySummaryDto {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub company_name: String,
    pub submitted_at: String,
}

impl From<SubmissionSummary> for SurveySummaryDto {
    fn from(summary: SubmissionSummary) -> Self {
        Self {
            id: summary.id.to_string(),
            full_name: summary.full_name,
            email: summary.email,
            company_name: summary.company_name,
            submitted_at: summary.submitted_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Uniform failure body: `success` is always false, `message` is
/// human-readable, and `error` is the stable machine code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: code.to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MalformedRequest, message)
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(error: &DomainError) -> Self {
        Self::new(error.code, error.message.clone())
    }
}
