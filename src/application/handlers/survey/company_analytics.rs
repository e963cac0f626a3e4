//! CompanyAnalyticsHandler - Query handler for averaged company analytics.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::survey::{compute_company_analytics, CompanyAnalytics};
use crate::ports::SubmissionRepository;

/// Query for a company's aggregated analytics.
#[derive(Debug, Clone)]
pub struct CompanyAnalyticsQuery {
    pub company_name: String,
}

/// Handler computing per-question averages over a company's submissions.
///
/// Analytics always cover the complete matching set, never a page of it.
pub struct CompanyAnalyticsHandler {
    repository: Arc<dyn SubmissionRepository>,
}

impl CompanyAnalyticsHandler {
    pub fn new(repository: Arc<dyn SubmissionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: CompanyAnalyticsQuery,
    ) -> Result<CompanyAnalytics, DomainError> {
        let submissions = self
            .repository
            .find_all_by_company(&query.company_name)
            .await?;

        compute_company_analytics(&submissions)
    }
}
