//! HTTP handlers for the survey endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::survey::{
    CompanyAnalyticsHandler, CompanyAnalyticsQuery, GetSurveyHandler, GetSurveyQuery,
    ListCompanySurveysHandler, ListCompanySurveysQuery, ListSurveysHandler, ListSurveysQuery,
    SubmitSurveyCommand, SubmitSurveyError, SubmitSurveyHandler,
};
use crate::config::SurveyConfig;
use crate::domain::foundation::{DomainError, ErrorCode, SubmissionId};
use crate::domain::survey::SubmissionDraft;
use crate::ports::PageOptions;

use super::dto::{
    ErrorResponse, ListQueryParams, SubmitSurveyRequest, SubmitSurveyResponse, SuccessResponse,
    SurveyResponseDto, SurveySummaryDto,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SurveyHandlers {
    submit_handler: Arc<SubmitSurveyHandler>,
    list_handler: Arc<ListSurveysHandler>,
    get_handler: Arc<GetSurveyHandler>,
    company_handler: Arc<ListCompanySurveysHandler>,
    analytics_handler: Arc<CompanyAnalyticsHandler>,
    config: SurveyConfig,
}

impl SurveyHandlers {
    pub fn new(
        submit_handler: Arc<SubmitSurveyHandler>,
        list_handler: Arc<ListSurveysHandler>,
        get_handler: Arc<GetSurveyHandler>,
        company_handler: Arc<ListCompanySurveysHandler>,
        analytics_handler: Arc<CompanyAnalyticsHandler>,
        config: SurveyConfig,
    ) -> Self {
        Self {
            submit_handler,
            list_handler,
            get_handler,
            company_handler,
            analytics_handler,
            config,
        }
    }

    fn page_options(&self, params: &ListQueryParams) -> PageOptions {
        let page = params.page.unwrap_or(1);
        let limit = params
            .limit
            .unwrap_or(self.config.default_page_size)
            .min(self.config.max_page_size);
        PageOptions::new(page, limit)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/surveys - Store a finished submission
pub async fn submit_survey(
    State(handlers): State<SurveyHandlers>,
    headers: HeaderMap,
    body: Result<Json<SubmitSurveyRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::malformed(format!(
                    "Invalid request body: {}",
                    rejection.body_text()
                ))),
            )
                .into_response()
        }
    };

    let (user_details, question_responses) = match (req.user_details, req.question_responses) {
        (Some(details), Some(responses)) => (details, responses),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::malformed(
                    "Missing required fields: userDetails and questionResponses",
                )),
            )
                .into_response()
        }
    };

    let cmd = SubmitSurveyCommand {
        draft: SubmissionDraft {
            user_details,
            question_responses,
            completion_time: req.completion_time,
        },
        ip_address: client_ip(&headers),
        user_agent: user_agent(&headers),
    };

    match handlers.submit_handler.handle(cmd).await {
        Ok(result) => {
            let response = SuccessResponse::new(SubmitSurveyResponse {
                id: result.id.to_string(),
                submitted_at: result.submitted_at.as_datetime().to_rfc3339(),
                company_name: result.company_name,
                redirect_url: result.redirect_url,
            })
            .with_message("Survey submitted successfully");
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_submit_error(e),
    }
}

/// GET /api/surveys - Paginated listing of submission summaries
pub async fn list_surveys(
    State(handlers): State<SurveyHandlers>,
    Query(params): Query<ListQueryParams>,
) -> Response {
    let query = ListSurveysQuery {
        options: handlers.page_options(&params),
    };

    match handlers.list_handler.handle(query).await {
        Ok(result) => {
            let items: Vec<SurveySummaryDto> =
                result.items.into_iter().map(Into::into).collect();
            let response = SuccessResponse::new(items).with_pagination(result.pagination);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_domain_error(&e),
    }
}

/// GET /api/surveys/:id - One full submission
pub async fn get_survey(
    State(handlers): State<SurveyHandlers>,
    Path(id): Path<String>,
) -> Response {
    let id = match id.parse::<SubmissionId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::malformed("Invalid survey ID")),
            )
                .into_response()
        }
    };

    match handlers.get_handler.handle(GetSurveyQuery { id }).await {
        Ok(submission) => {
            let response = SuccessResponse::new(SurveyResponseDto::from(submission));
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_domain_error(&e),
    }
}

/// GET /api/surveys/company/:company_name - A company's submissions
pub async fn list_company_surveys(
    State(handlers): State<SurveyHandlers>,
    Path(company_name): Path<String>,
    Query(params): Query<ListQueryParams>,
) -> Response {
    let query = ListCompanySurveysQuery {
        company_name,
        options: handlers.page_options(&params),
    };

    match handlers.company_handler.handle(query).await {
        Ok(result) => {
            let items: Vec<SurveyResponseDto> =
                result.items.into_iter().map(Into::into).collect();
            let response = SuccessResponse::new(items).with_pagination(result.pagination);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_domain_error(&e),
    }
}

/// GET /api/surveys/analytics/:company_name - Averaged company analytics
pub async fn company_analytics(
    State(handlers): State<SurveyHandlers>,
    Path(company_name): Path<String>,
) -> Response {
    let query = CompanyAnalyticsQuery { company_name };

    match handlers.analytics_handler.handle(query).await {
        Ok(analytics) => {
            let response = SuccessResponse::new(analytics);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_domain_error(&e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Request metadata
// ════════════════════════════════════════════════════════════════════════════

/// First address in `x-forwarded-for`, `"unknown"` when absent.
fn client_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn user_agent(headers: &HeaderMap) -> String {
    headers
        .get(axum::http::header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| "unknown".to_string())
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_submit_error(error: SubmitSurveyError) -> Response {
    match error {
        SubmitSurveyError::NoResponses => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(error.to_string())),
        )
            .into_response(),
        SubmitSurveyError::InvalidPointTotals { .. } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(error.to_string())),
        )
            .into_response(),
        SubmitSurveyError::InvalidDetails(validation) => {
            handle_domain_error(&DomainError::from(validation))
        }
        SubmitSurveyError::Storage(e) => handle_domain_error(&e),
    }
}

/// Maps a domain error to the uniform failure body.
///
/// Not-found codes become 404, validation codes 400, everything else 500.
/// Infrastructure messages are not leaked to clients.
fn handle_domain_error(error: &DomainError) -> Response {
    let status = match error.code {
        ErrorCode::SubmissionNotFound | ErrorCode::NoSubmissionsFound => StatusCode::NOT_FOUND,
        ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::OutOfRange
        | ErrorCode::InvalidFormat
        | ErrorCode::MalformedRequest => StatusCode::BAD_REQUEST,
        ErrorCode::DatabaseError | ErrorCode::TransportError | ErrorCode::InternalError => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let body = if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(code = %error.code, message = %error.message, "request failed");
        ErrorResponse::new(error.code, "Internal server error")
    } else {
        ErrorResponse::from(error)
    };

    (status, Json(body)).into_response()
}
