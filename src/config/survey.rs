//! Survey behaviour configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Survey configuration
///
/// Controls pagination defaults for the listing endpoints and the base URL
/// used to build the post-submission redirect target.
#[derive(Debug, Clone, Deserialize)]
pub struct SurveyConfig {
    /// Default page size for listing endpoints
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,

    /// Maximum page size a client may request
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,

    /// Base URL for the post-submission redirect; the submission id is
    /// appended as the final path segment
    #[serde(default = "default_redirect_base_url")]
    pub redirect_base_url: String,
}

impl SurveyConfig {
    /// Build the redirect URL for a stored submission.
    pub fn redirect_url_for(&self, submission_id: impl std::fmt::Display) -> String {
        format!(
            "{}/{}",
            self.redirect_base_url.trim_end_matches('/'),
            submission_id
        )
    }

    /// Validate survey configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_page_size == 0 || self.default_page_size > self.max_page_size {
            return Err(ValidationError::InvalidPageSize);
        }
        if self.redirect_base_url.is_empty() {
            return Err(ValidationError::MissingRequired("SURVEY_REDIRECT_BASE_URL"));
        }
        Ok(())
    }
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            redirect_base_url: default_redirect_base_url(),
        }
    }
}

fn default_page_size() -> u32 {
    10
}

fn default_max_page_size() -> u32 {
    100
}

fn default_redirect_base_url() -> String {
    "http://localhost:8080/responses".to_string()
}
