//! Survey command and query handlers.

mod company_analytics;
mod company_surveys;
mod get_survey;
mod list_surveys;
mod submit_session;
mod submit_survey;

#[cfg(test)]
pub(crate) mod test_support;

pub use company_analytics::{CompanyAnalyticsHandler, CompanyAnalyticsQuery};
pub use company_surveys::{
    ListCompanySurveysHandler, ListCompanySurveysQuery, ListCompanySurveysResult,
};
pub use get_survey::{GetSurveyHandler, GetSurveyQuery};
pub use list_surveys::{ListSurveysHandler, ListSurveysQuery, ListSurveysResult};
pub use submit_session::SubmitSessionHandler;
pub use submit_survey::{
    SubmitSurveyCommand, SubmitSurveyError, SubmitSurveyHandler, SubmitSurveyResult,
};
