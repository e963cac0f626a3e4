//! Error types for the survey session lifecycle.

use thiserror::Error;

/// Failures raised while aggregating or submitting a survey session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurveyError {
    /// Submission attempted without user details.
    #[error("Missing user details")]
    MissingUserDetails,

    /// Submission attempted before any question was answered.
    #[error("Please complete all survey questions before submitting")]
    IncompleteQuestions,

    /// The session already submitted successfully; duplicate submissions
    /// are rejected rather than silently repeated.
    #[error("This survey has already been submitted")]
    AlreadySubmitted,

    /// A submission is still in flight; the caller must wait for it to
    /// settle before retrying.
    #[error("A submission is already in progress")]
    SubmissionInFlight,

    /// The persistence gateway rejected or failed the submission. The
    /// original message is retained for diagnostics.
    #[error("Failed to submit survey: {0}")]
    Gateway(String),
}
