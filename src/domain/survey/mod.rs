//! Survey domain - the weighted-allocation assessment.
//!
//! # Module Organization
//!
//! - `allocation` - 100-point allocations and their validation rules
//! - `question` - static question catalog (four options per question)
//! - `navigator` - sequential step state machine for the multi-step form
//! - `details` - respondent details and company-name derivation
//! - `submission` - immutable stored submission and its projections
//! - `session` - in-progress survey state and submission aggregation
//! - `analytics` - per-question averaged company analytics

mod allocation;
mod analytics;
mod details;
mod errors;
mod navigator;
mod question;
mod session;
mod submission;

pub use allocation::{validate_question_step, AllocationViolation, PointAllocation, StepViolation};
pub use analytics::{
    compute_company_analytics, CompanyAnalytics, DateRange, QuestionAverages, StateAverages,
};
pub use details::{derive_company_name, UserDetails};
pub use errors::SurveyError;
pub use navigator::{StepKind, StepNavigator};
pub use question::{questions, Question};
pub use session::{SubmissionDraft, SubmitStatus, SurveyProgress, SurveySession};
pub use submission::{QuestionResponse, SubmissionSummary, SurveySubmission};
