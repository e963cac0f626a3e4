//! In-memory implementation of SubmissionRepository.
//!
//! Backs the integration tests and local development without a database.
//! Delivery order and filter semantics deliberately mirror the PostgreSQL
//! adapter: newest-first listings, case-insensitive substring company match.
//!
//! # Panics
//!
//! Methods may panic if the internal lock is poisoned. This is acceptable
//! for test and development use but this adapter should NOT back a
//! production deployment.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SubmissionId};
use crate::domain::survey::{SubmissionSummary, SurveySubmission};
use crate::ports::{PageOptions, SubmissionPage, SubmissionRepository};

/// In-memory submission store.
#[derive(Default)]
pub struct InMemorySubmissionRepository {
    submissions: Mutex<Vec<SurveySubmission>>,
}

impl InMemorySubmissionRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with submissions.
    pub fn with_submissions(submissions: Vec<SurveySubmission>) -> Self {
        Self {
            submissions: Mutex::new(submissions),
        }
    }

    /// Number of stored submissions (for test assertions).
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Snapshot of the stored submissions in insertion order (for test
    /// assertions).
    pub fn all(&self) -> Vec<SurveySubmission> {
        self.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<SurveySubmission>> {
        self.submissions
            .lock()
            .expect("InMemorySubmissionRepository: lock poisoned")
    }

    fn newest_first(&self) -> Vec<SurveySubmission> {
        let mut all = self.lock().clone();
        all.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        all
    }

    fn matching(&self, company: &str) -> Vec<SurveySubmission> {
        let needle = company.to_lowercase();
        self.newest_first()
            .into_iter()
            .filter(|s| s.company_name.to_lowercase().contains(&needle))
            .collect()
    }
}

fn page_of<T>(items: Vec<T>, options: &PageOptions) -> SubmissionPage<T> {
    let total = items.len() as u64;
    let items = items
        .into_iter()
        .skip(options.offset() as usize)
        .take(options.limit as usize)
        .collect();
    SubmissionPage { items, total }
}

#[async_trait]
impl SubmissionRepository for InMemorySubmissionRepository {
    async fn insert(&self, submission: &SurveySubmission) -> Result<(), DomainError> {
        self.lock().push(submission.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &SubmissionId,
    ) -> Result<Option<SurveySubmission>, DomainError> {
        Ok(self.lock().iter().find(|s| s.id == *id).cloned())
    }

    async fn list_summaries(
        &self,
        options: &PageOptions,
    ) -> Result<SubmissionPage<SubmissionSummary>, DomainError> {
        let summaries = self
            .newest_first()
            .iter()
            .map(SurveySubmission::summary)
            .collect();
        Ok(page_of(summaries, options))
    }

    async fn find_by_company(
        &self,
        company: &str,
        options: &PageOptions,
    ) -> Result<SubmissionPage<SurveySubmission>, DomainError> {
        Ok(page_of(self.matching(company), options))
    }

    async fn find_all_by_company(
        &self,
        company: &str,
    ) -> Result<Vec<SurveySubmission>, DomainError> {
        Ok(self.matching(company))
    }
}
