//! GetSurveyHandler - Query handler for one submission by id.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, SubmissionId};
use crate::domain::survey::SurveySubmission;
use crate::ports::SubmissionRepository;

/// Query to fetch a full submission by id.
#[derive(Debug, Clone, Copy)]
pub struct GetSurveyQuery {
    pub id: SubmissionId,
}

/// Handler for retrieving a single stored submission.
pub struct GetSurveyHandler {
    repository: Arc<dyn SubmissionRepository>,
}

impl GetSurveyHandler {
    pub fn new(repository: Arc<dyn SubmissionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetSurveyQuery) -> Result<SurveySubmission, DomainError> {
        self.repository
            .find_by_id(&query.id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::SubmissionNotFound, "Survey not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::survey::test_support::{repo_with, submission};
    use crate::domain::foundation::Timestamp;

    #[tokio::test]
    async fn returns_the_stored_submission() {
        let stored = submission("Acme", Timestamp::now());
        let id = stored.id;
        let handler = GetSurveyHandler::new(repo_with(vec![stored]));

        let found = handler.handle(GetSurveyQuery { id }).await.unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.company_name, "Acme");
    }

    #[tokio::test]
    async fn unknown_id_maps_to_not_found() {
        let handler = GetSurveyHandler::new(repo_with(Vec::new()));

        let err = handler
            .handle(GetSurveyQuery {
                id: SubmissionId::new(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::SubmissionNotFound);
        assert_eq!(err.message, "Survey not found");
    }
}
