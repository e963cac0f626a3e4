//! HTTP routes for survey endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    company_analytics, get_survey, list_company_surveys, list_surveys, submit_survey,
    SurveyHandlers,
};

/// Creates the survey router with all endpoints.
///
/// Static segments are registered before the `/:id` capture so company and
/// analytics paths never parse as submission ids.
pub fn survey_routes(handlers: SurveyHandlers) -> Router {
    Router::new()
        .route("/", post(submit_survey))
        .route("/", get(list_surveys))
        .route("/company/:company_name", get(list_company_surveys))
        .route("/analytics/:company_name", get(company_analytics))
        .route("/:id", get(get_survey))
        .with_state(handlers)
}
