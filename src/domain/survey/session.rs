//! In-progress survey session.
//!
//! The session owns everything the respondent has entered but not yet
//! submitted: optional user details and the per-question responses. It is
//! discarded if abandoned and becomes durable only once the built
//! submission is handed to the persistence gateway. A failed submission
//! never discards entered data, so the respondent can retry without
//! re-filling the form.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

use super::details::UserDetails;
use super::errors::SurveyError;
use super::submission::QuestionResponse;

/// Where the session's single asynchronous operation currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    /// The gateway call is in flight; repeated submit triggers are rejected.
    InFlight,
    /// Exactly one successful submission, carrying the caller's redirect
    /// target extracted from the gateway response.
    Succeeded { redirect_url: Option<String> },
    /// The last attempt failed; entered data is retained for a manual retry.
    Failed { message: String },
}

/// Informational progress numbers; never gates navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyProgress {
    pub completed_questions: usize,
    pub total_questions: usize,
    pub has_user_details: bool,
    pub progress_percentage: u32,
}

/// Everything the client hands to the gateway: the validated payload minus
/// the server-assigned fields (id, timestamps, request metadata).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDraft {
    pub user_details: UserDetails,
    pub question_responses: Vec<QuestionResponse>,
    /// Whole seconds from the first interaction to the submit trigger.
    pub completion_time: u64,
}

/// The active form session's mutable state.
#[derive(Debug, Clone)]
pub struct SurveySession {
    user_details: Option<UserDetails>,
    responses: Vec<QuestionResponse>,
    started_at: Timestamp,
    status: SubmitStatus,
}

impl SurveySession {
    /// Starts a session, timestamping the first interaction.
    pub fn new() -> Self {
        Self::started_at(Timestamp::now())
    }

    /// Starts a session with an explicit start time (useful in tests).
    pub fn started_at(started_at: Timestamp) -> Self {
        Self {
            user_details: None,
            responses: Vec::new(),
            started_at,
            status: SubmitStatus::Idle,
        }
    }

    pub fn user_details(&self) -> Option<&UserDetails> {
        self.user_details.as_ref()
    }

    pub fn responses(&self) -> &[QuestionResponse] {
        &self.responses
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::InFlight
    }

    /// Stores the details entered on the final step.
    pub fn save_user_details(&mut self, details: UserDetails) {
        self.user_details = Some(details);
    }

    /// Saves a confirmed question response.
    ///
    /// At most one response exists per question id: re-saving after a
    /// revisit replaces the earlier entry in place instead of appending.
    pub fn save_response(&mut self, response: QuestionResponse) {
        match self
            .responses
            .iter_mut()
            .find(|r| r.question_id == response.question_id)
        {
            Some(existing) => *existing = response,
            None => self.responses.push(response),
        }
    }

    /// The previously saved response for a question, used to pre-populate
    /// a revisited step.
    pub fn response_for(&self, question_id: u32) -> Option<&QuestionResponse> {
        self.responses.iter().find(|r| r.question_id == question_id)
    }

    /// Informational progress: answered questions plus the details step,
    /// over the total step count excluding instructions.
    pub fn progress(&self, total_questions: usize) -> SurveyProgress {
        let completed_questions = self.responses.len();
        let has_user_details = self.user_details.is_some();
        let done = completed_questions + usize::from(has_user_details);
        let progress_percentage =
            ((done as f64 / (total_questions + 1) as f64) * 100.0).round() as u32;

        SurveyProgress {
            completed_questions,
            total_questions,
            has_user_details,
            progress_percentage,
        }
    }

    /// Begins a submission attempt at `now`.
    ///
    /// Preconditions are checked before any gateway contact: user details
    /// must be present and at least one question answered. A session that
    /// already succeeded rejects further attempts; one that is in flight
    /// must settle first. On success the session moves to `InFlight` and
    /// the caller receives the payload for the gateway.
    pub fn begin_submission(
        &mut self,
        details: Option<UserDetails>,
        now: Timestamp,
    ) -> Result<SubmissionDraft, SurveyError> {
        match &self.status {
            SubmitStatus::Succeeded { .. } => return Err(SurveyError::AlreadySubmitted),
            SubmitStatus::InFlight => return Err(SurveyError::SubmissionInFlight),
            SubmitStatus::Idle | SubmitStatus::Failed { .. } => {}
        }

        let details = details
            .or_else(|| self.user_details.clone())
            .ok_or(SurveyError::MissingUserDetails)?;
        if self.responses.is_empty() {
            return Err(SurveyError::IncompleteQuestions);
        }

        self.user_details = Some(details.clone());
        self.status = SubmitStatus::InFlight;

        Ok(SubmissionDraft {
            user_details: details,
            question_responses: self.responses.clone(),
            completion_time: now.secs_since(&self.started_at),
        })
    }

    /// Settles an in-flight submission as successful. The redirect target
    /// travels through this result to the caller; no global state.
    pub fn complete_submission(&mut self, redirect_url: Option<String>) {
        self.status = SubmitStatus::Succeeded { redirect_url };
    }

    /// Settles an in-flight submission as failed, keeping entered data.
    pub fn fail_submission(&mut self, message: impl Into<String>) {
        self.status = SubmitStatus::Failed {
            message: message.into(),
        };
    }
}

impl Default for SurveySession {
    fn default() -> Self {
        Self::new()
    }
}
