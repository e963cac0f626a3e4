//! PostgreSQL implementation of SubmissionRepository.
//!
//! Stores submissions in the `survey_submissions` table. The nested user
//! details and question responses travel as JSONB; the columns queries
//! filter or sort on (company name, submission time) are first-class.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, SubmissionId, Timestamp};
use crate::domain::survey::{QuestionResponse, SubmissionSummary, SurveySubmission, UserDetails};
use crate::ports::{PageOptions, SubmissionPage, SubmissionRepository};

/// PostgreSQL implementation of SubmissionRepository.
#[derive(Clone)]
pub struct PostgresSubmissionRepository {
    pool: PgPool,
}

impl PostgresSubmissionRepository {
    /// Creates a new PostgresSubmissionRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn count_matching(&self, company: &str) -> Result<u64, DomainError> {
        let result: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM survey_submissions WHERE company_name ILIKE $1",
        )
        .bind(company_pattern(company))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to count submissions: {}", e),
            )
        })?;

        Ok(result.0 as u64)
    }
}

#[async_trait]
impl SubmissionRepository for PostgresSubmissionRepository {
    async fn insert(&self, submission: &SurveySubmission) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO survey_submissions (
                id, user_details, question_responses, completion_time,
                submitted_at, ip_address, user_agent, company_name
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(submission.id.as_uuid())
        .bind(Json(&submission.user_details))
        .bind(Json(&submission.question_responses))
        .bind(submission.completion_time as i64)
        .bind(submission.submitted_at.as_datetime())
        .bind(&submission.ip_address)
        .bind(&submission.user_agent)
        .bind(&submission.company_name)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert submission: {}", e),
            )
        })?;

        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &SubmissionId,
    ) -> Result<Option<SurveySubmission>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_details, question_responses, completion_time,
                   submitted_at, ip_address, user_agent, company_name
            FROM survey_submissions
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch submission: {}", e),
            )
        })?;

        row.map(row_to_submission).transpose()
    }

    async fn list_summaries(
        &self,
        options: &PageOptions,
    ) -> Result<SubmissionPage<SubmissionSummary>, DomainError> {
        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM survey_submissions")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to count submissions: {}", e),
                )
            })?;

        let rows = sqlx::query(
            r#"
            SELECT id, submitted_at, company_name,
                   user_details->>'fullName' AS full_name,
                   user_details->>'email' AS email
            FROM survey_submissions
            ORDER BY submitted_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(i64::from(options.limit))
        .bind(options.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list submissions: {}", e),
            )
        })?;

        let items: Result<Vec<SubmissionSummary>, DomainError> =
            rows.into_iter().map(row_to_summary).collect();

        Ok(SubmissionPage {
            items: items?,
            total: total.0 as u64,
        })
    }

    async fn find_by_company(
        &self,
        company: &str,
        options: &PageOptions,
    ) -> Result<SubmissionPage<SurveySubmission>, DomainError> {
        let total = self.count_matching(company).await?;

        let rows = sqlx::query(
            r#"
            SELECT id, user_details, question_responses, completion_time,
                   submitted_at, ip_address, user_agent, company_name
            FROM survey_submissions
            WHERE company_name ILIKE $1
            ORDER BY submitted_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(company_pattern(company))
        .bind(i64::from(options.limit))
        .bind(options.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch company submissions: {}", e),
            )
        })?;

        let items: Result<Vec<SurveySubmission>, DomainError> =
            rows.into_iter().map(row_to_submission).collect();

        Ok(SubmissionPage {
            items: items?,
            total,
        })
    }

    async fn find_all_by_company(
        &self,
        company: &str,
    ) -> Result<Vec<SurveySubmission>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_details, question_responses, completion_time,
                   submitted_at, ip_address, user_agent, company_name
            FROM survey_submissions
            WHERE company_name ILIKE $1
            ORDER BY submitted_at DESC
            "#,
        )
        .bind(company_pattern(company))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch company submissions: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_submission).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

/// Case-insensitive substring match, with LIKE metacharacters escaped so a
/// literal `%` or `_` in a company name cannot widen the filter.
fn company_pattern(company: &str) -> String {
    let escaped = company
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

fn db_error(context: &str, e: impl std::fmt::Display) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e))
}

fn row_to_submission(row: sqlx::postgres::PgRow) -> Result<SurveySubmission, DomainError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| db_error("Failed to get id", e))?;
    let user_details: Json<UserDetails> = row
        .try_get("user_details")
        .map_err(|e| db_error("Failed to get user_details", e))?;
    let question_responses: Json<Vec<QuestionResponse>> = row
        .try_get("question_responses")
        .map_err(|e| db_error("Failed to get question_responses", e))?;
    let completion_time: i64 = row
        .try_get("completion_time")
        .map_err(|e| db_error("Failed to get completion_time", e))?;
    let submitted_at: chrono::DateTime<chrono::Utc> = row
        .try_get("submitted_at")
        .map_err(|e| db_error("Failed to get submitted_at", e))?;
    let ip_address: String = row
        .try_get("ip_address")
        .map_err(|e| db_error("Failed to get ip_address", e))?;
    let user_agent: String = row
        .try_get("user_agent")
        .map_err(|e| db_error("Failed to get user_agent", e))?;
    let company_name: String = row
        .try_get("company_name")
        .map_err(|e| db_error("Failed to get company_name", e))?;

    Ok(SurveySubmission {
        id: SubmissionId::from_uuid(id),
        user_details: user_details.0,
        question_responses: question_responses.0,
        completion_time: completion_time.max(0) as u64,
        submitted_at: Timestamp::from_datetime(submitted_at),
        ip_address,
        user_agent,
        company_name,
    })
}

fn row_to_summary(row: sqlx::postgres::PgRow) -> Result<SubmissionSummary, DomainError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| db_error("Failed to get id", e))?;
    let full_name: String = row
        .try_get("full_name")
        .map_err(|e| db_error("Failed to get full_name", e))?;
    let email: String = row
        .try_get("email")
        .map_err(|e| db_error("Failed to get email", e))?;
    let company_name: String = row
        .try_get("company_name")
        .map_err(|e| db_error("Failed to get company_name", e))?;
    let submitted_at: chrono::DateTime<chrono::Utc> = row
        .try_get("submitted_at")
        .map_err(|e| db_error("Failed to get submitted_at", e))?;

    Ok(SubmissionSummary {
        id: SubmissionId::from_uuid(id),
        full_name,
        email,
        company_name,
        submitted_at: Timestamp::from_datetime(submitted_at),
    })
}
