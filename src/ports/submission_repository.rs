//! Submission repository port (the persistence gateway).
//!
//! Defines the contract for persisting and retrieving survey submissions.
//! Records are created exactly once and never updated; every listing is
//! ordered newest-first by submission time.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, SubmissionId};
use crate::domain::survey::{SubmissionSummary, SurveySubmission};

/// Repository port for survey submission persistence.
///
/// Company filters are case-insensitive substring matches on the stored
/// company name. Per-record create/read operations are assumed atomic; no
/// cross-record transactions are required.
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Store a new submission.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, submission: &SurveySubmission) -> Result<(), DomainError>;

    /// Find a full submission by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SubmissionId)
        -> Result<Option<SurveySubmission>, DomainError>;

    /// Page through listing summaries of all submissions, newest-first.
    async fn list_summaries(
        &self,
        options: &PageOptions,
    ) -> Result<SubmissionPage<SubmissionSummary>, DomainError>;

    /// Page through full submissions whose company matches, newest-first.
    async fn find_by_company(
        &self,
        company: &str,
        options: &PageOptions,
    ) -> Result<SubmissionPage<SurveySubmission>, DomainError>;

    /// All submissions whose company matches, newest-first, unpaginated.
    ///
    /// Backing query for analytics, which needs the complete set.
    async fn find_all_by_company(
        &self,
        company: &str,
    ) -> Result<Vec<SurveySubmission>, DomainError>;
}

/// Options for a paginated query. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageOptions {
    pub page: u32,
    pub limit: u32,
}

impl PageOptions {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    /// Number of records to skip.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

impl Default for PageOptions {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

/// One page of results plus the total match count.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionPage<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> SubmissionPage<T> {
    /// Derives the client-facing pagination block.
    pub fn pagination(&self, options: &PageOptions) -> Pagination {
        Pagination::compute(options.page, options.limit, self.total)
    }
}

/// Client-facing pagination metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_records: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    /// `total_pages` is `ceil(total / limit)`; `has_next`/`has_prev` follow
    /// from the current page's position in that range.
    pub fn compute(page: u32, limit: u32, total: u64) -> Self {
        let limit = u64::from(limit.max(1));
        let total_pages = ((total + limit - 1) / limit) as u32;
        Self {
            current_page: page,
            total_pages,
            total_records: total,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn submission_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn SubmissionRepository) {}
    }

    #[test]
    fn page_options_compute_offsets() {
        assert_eq!(PageOptions::new(1, 10).offset(), 0);
        assert_eq!(PageOptions::new(3, 10).offset(), 20);
    }

    #[test]
    fn page_options_clamp_zero_values() {
        let options = PageOptions::new(0, 0);
        assert_eq!(options.page, 1);
        assert_eq!(options.limit, 1);
    }

    #[test]
    fn pagination_totals_follow_ceiling_division() {
        let p = Pagination::compute(1, 10, 25);
        assert_eq!(p.total_pages, 3);
        assert!(p.has_next);
        assert!(!p.has_prev);

        let p = Pagination::compute(3, 10, 25);
        assert!(!p.has_next);
        assert!(p.has_prev);
    }

    #[test]
    fn pagination_of_empty_set_has_no_neighbours() {
        let p = Pagination::compute(1, 10, 0);
        assert_eq!(p.total_pages, 0);
        assert!(!p.has_next);
        assert!(!p.has_prev);
    }

    #[test]
    fn pagination_exact_multiple_has_no_extra_page() {
        let p = Pagination::compute(2, 10, 20);
        assert_eq!(p.total_pages, 2);
        assert!(!p.has_next);
    }
}
