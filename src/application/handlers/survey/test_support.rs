//! Shared fixtures and mock ports for the survey handler tests.

use std::sync::Arc;

use async_trait::async_trait;

use crate::adapters::memory::InMemorySubmissionRepository;
use crate::domain::foundation::{DomainError, ErrorCode, SubmissionId, Timestamp};
use crate::domain::survey::{
    PointAllocation, QuestionResponse, SubmissionDraft, SubmissionSummary, SurveySubmission,
    UserDetails,
};
use crate::ports::{PageOptions, SubmissionPage, SubmissionRepository};

pub fn user_details() -> UserDetails {
    UserDetails {
        full_name: "Jane Doe".to_string(),
        email: "jane@acme.com".to_string(),
        phone_number: String::new(),
        designation: "Manager".to_string(),
        cohort_team: "Design".to_string(),
        office_typology: "HQ".to_string(),
        company: "Acme".to_string(),
    }
}

pub fn response(question_id: u32) -> QuestionResponse {
    QuestionResponse {
        question_id,
        question_title: format!("Question {question_id}"),
        current_state: PointAllocation::new(40, 30, 20, 10),
        aspirational_state: PointAllocation::new(10, 20, 30, 40),
    }
}

pub fn draft() -> SubmissionDraft {
    SubmissionDraft {
        user_details: user_details(),
        question_responses: vec![response(1), response(2)],
        completion_time: 184,
    }
}

pub fn submission(company: &str, submitted_at: Timestamp) -> SurveySubmission {
    let mut details = user_details();
    details.company = company.to_string();
    SurveySubmission {
        id: SubmissionId::new(),
        user_details: details,
        question_responses: vec![response(1), response(2)],
        completion_time: 184,
        submitted_at,
        ip_address: "203.0.113.9".to_string(),
        user_agent: "test-agent".to_string(),
        company_name: company.to_string(),
    }
}

/// Repository pre-seeded with the given submissions.
pub fn repo_with(submissions: Vec<SurveySubmission>) -> Arc<InMemorySubmissionRepository> {
    Arc::new(InMemorySubmissionRepository::with_submissions(submissions))
}

/// Repository where every operation fails with a database error.
pub struct FailingSubmissionRepository;

impl FailingSubmissionRepository {
    fn error() -> DomainError {
        DomainError::new(ErrorCode::DatabaseError, "Simulated storage failure")
    }
}

#[async_trait]
impl SubmissionRepository for FailingSubmissionRepository {
    async fn insert(&self, _submission: &SurveySubmission) -> Result<(), DomainError> {
        Err(Self::error())
    }

    async fn find_by_id(
        &self,
        _id: &SubmissionId,
    ) -> Result<Option<SurveySubmission>, DomainError> {
        Err(Self::error())
    }

    async fn list_summaries(
        &self,
        _options: &PageOptions,
    ) -> Result<SubmissionPage<SubmissionSummary>, DomainError> {
        Err(Self::error())
    }

    async fn find_by_company(
        &self,
        _company: &str,
        _options: &PageOptions,
    ) -> Result<SubmissionPage<SurveySubmission>, DomainError> {
        Err(Self::error())
    }

    async fn find_all_by_company(
        &self,
        _company: &str,
    ) -> Result<Vec<SurveySubmission>, DomainError> {
        Err(Self::error())
    }
}
