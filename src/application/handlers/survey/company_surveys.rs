//! ListCompanySurveysHandler - Query handler for a company's submissions.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::survey::SurveySubmission;
use crate::ports::{PageOptions, Pagination, SubmissionRepository};

/// Query for one page of a company's full submissions.
///
/// The company filter is a case-insensitive substring match on the stored
/// company name.
#[derive(Debug, Clone)]
pub struct ListCompanySurveysQuery {
    pub company_name: String,
    pub options: PageOptions,
}

#[derive(Debug, Clone)]
pub struct ListCompanySurveysResult {
    pub items: Vec<SurveySubmission>,
    pub pagination: Pagination,
}

/// Handler for listing a company's submissions, newest first.
pub struct ListCompanySurveysHandler {
    repository: Arc<dyn SubmissionRepository>,
}

impl ListCompanySurveysHandler {
    pub fn new(repository: Arc<dyn SubmissionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ListCompanySurveysQuery,
    ) -> Result<ListCompanySurveysResult, DomainError> {
        let page = self
            .repository
            .find_by_company(&query.company_name, &query.options)
            .await?;
        let pagination = page.pagination(&query.options);

        Ok(ListCompanySurveysResult {
            items: page.items,
            pagination,
        })
    }
}
