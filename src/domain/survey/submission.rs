//! Stored survey submission aggregate and its projections.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SubmissionId, Timestamp};

use super::allocation::{validate_question_step, PointAllocation, StepViolation};
use super::details::UserDetails;

/// A respondent's confirmed answer to one question: both allocation states
/// plus the question title denormalised for analytics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub question_id: u32,
    pub question_title: String,
    pub current_state: PointAllocation,
    pub aspirational_state: PointAllocation,
}

impl QuestionResponse {
    /// Re-checks both allocation states against the survey rules.
    ///
    /// Used server-side so a bypassed client validator cannot persist
    /// allocations that do not total 100 per state.
    pub fn validate(&self) -> Result<(), StepViolation> {
        validate_question_step(&self.current_state, &self.aspirational_state)
    }
}

/// An immutable, persisted survey submission.
///
/// Created exactly once at submission time and owned by the persistence
/// gateway afterwards; no field is ever updated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveySubmission {
    pub id: SubmissionId,
    pub user_details: UserDetails,
    pub question_responses: Vec<QuestionResponse>,
    /// Whole seconds from first interaction to submission.
    pub completion_time: u64,
    pub submitted_at: Timestamp,
    pub ip_address: String,
    pub user_agent: String,
    /// Supplied by the respondent or derived once from the email domain.
    pub company_name: String,
}

impl SurveySubmission {
    /// Projects the submission down to the listing summary.
    pub fn summary(&self) -> SubmissionSummary {
        SubmissionSummary {
            id: self.id,
            full_name: self.user_details.full_name.clone(),
            email: self.user_details.email.clone(),
            company_name: self.company_name.clone(),
            submitted_at: self.submitted_at,
        }
    }
}

/// Listing projection: who answered, for which company, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionSummary {
    pub id: SubmissionId,
    pub full_name: String,
    pub email: String,
    pub company_name: String,
    pub submitted_at: Timestamp,
}
