//! SubmitSessionHandler - drives a form session through the gateway.

use std::sync::Arc;

use tracing::warn;

use crate::domain::foundation::Timestamp;
use crate::domain::survey::{SurveyError, SurveySession, UserDetails};
use crate::ports::{GatewayError, SubmissionGateway, SubmissionReceipt};

/// Handler submitting an in-progress session to the backend.
///
/// The session itself owns the submit state machine (duplicate and
/// concurrent-submit guards live there); this handler only wires its
/// transitions to the gateway call and settles the outcome.
pub struct SubmitSessionHandler {
    gateway: Arc<dyn SubmissionGateway>,
}

impl SubmitSessionHandler {
    pub fn new(gateway: Arc<dyn SubmissionGateway>) -> Self {
        Self { gateway }
    }

    /// Submits the session, passing `details` as the final-step entry when
    /// the respondent confirmed them together with the submit trigger.
    ///
    /// On failure the session keeps all entered data and moves to `Failed`,
    /// so the caller can offer a retry.
    pub async fn handle(
        &self,
        session: &mut SurveySession,
        details: Option<UserDetails>,
    ) -> Result<SubmissionReceipt, SurveyError> {
        let draft = session.begin_submission(details, Timestamp::now())?;

        match self.gateway.submit(&draft).await {
            Ok(receipt) => {
                session.complete_submission(receipt.redirect_url.clone());
                Ok(receipt)
            }
            Err(err) => {
                let message = match &err {
                    GatewayError::Rejected { message } => message.clone(),
                    GatewayError::Transport { .. } => err.to_string(),
                };
                warn!(error = %message, "survey submission failed");
                session.fail_submission(message.clone());
                Err(SurveyError::Gateway(message))
            }
        }
    }
}
