//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod survey;

pub use survey::{
    CompanyAnalyticsHandler, CompanyAnalyticsQuery,
    GetSurveyHandler, GetSurveyQuery,
    ListCompanySurveysHandler, ListCompanySurveysQuery, ListCompanySurveysResult,
    ListSurveysHandler, ListSurveysQuery, ListSurveysResult,
    SubmitSessionHandler,
    SubmitSurveyCommand, SubmitSurveyError, SubmitSurveyHandler, SubmitSurveyResult,
};
