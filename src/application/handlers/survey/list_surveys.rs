//! ListSurveysHandler - Query handler for the paginated submission listing.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::survey::SubmissionSummary;
use crate::ports::{PageOptions, Pagination, SubmissionRepository};

/// Query for one page of submission summaries.
#[derive(Debug, Clone, Copy)]
pub struct ListSurveysQuery {
    pub options: PageOptions,
}

/// One page of summaries plus the client-facing pagination block.
#[derive(Debug, Clone)]
pub struct ListSurveysResult {
    pub items: Vec<SubmissionSummary>,
    pub pagination: Pagination,
}

/// Handler for listing stored submissions, newest first.
pub struct ListSurveysHandler {
    repository: Arc<dyn SubmissionRepository>,
}

impl ListSurveysHandler {
    pub fn new(repository: Arc<dyn SubmissionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListSurveysQuery) -> Result<ListSurveysResult, DomainError> {
        let page = self.repository.list_summaries(&query.options).await?;
        let pagination = page.pagination(&query.options);

        Ok(ListSurveysResult {
            items: page.items,
            pagination,
        })
    }
}
