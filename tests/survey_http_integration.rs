//! Integration tests for the survey HTTP endpoints.
//!
//! Drives the full router over the in-memory repository: submit, list,
//! fetch, company filter, analytics, and the uniform error bodies.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use workplace_pulse::adapters::http::{api_router, SurveyHandlers};
use workplace_pulse::adapters::memory::InMemorySubmissionRepository;
use workplace_pulse::application::handlers::survey::{
    CompanyAnalyticsHandler, GetSurveyHandler, ListCompanySurveysHandler, ListSurveysHandler,
    SubmitSurveyHandler,
};
use workplace_pulse::config::{ServerConfig, SurveyConfig};
use workplace_pulse::ports::SubmissionRepository;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app() -> Router {
    let repository: Arc<dyn SubmissionRepository> =
        Arc::new(InMemorySubmissionRepository::new());
    let survey_config = SurveyConfig::default();

    let handlers = SurveyHandlers::new(
        Arc::new(SubmitSurveyHandler::new(
            repository.clone(),
            survey_config.clone(),
        )),
        Arc::new(ListSurveysHandler::new(repository.clone())),
        Arc::new(GetSurveyHandler::new(repository.clone())),
        Arc::new(ListCompanySurveysHandler::new(repository.clone())),
        Arc::new(CompanyAnalyticsHandler::new(repository)),
        survey_config,
    );

    api_router(handlers, &ServerConfig::default())
}

fn submission_body(email: &str) -> Value {
    json!({
        "userDetails": {
            "fullName": "Jane Doe",
            "email": email,
            "designation": "Manager",
            "cohortTeam": "Design",
            "officeTypology": "HQ",
            "company": "Acme"
        },
        "questionResponses": [
            {
                "questionId": 1,
                "questionTitle": "Question 1",
                "currentState": {"A": 40, "B": 30, "C": 20, "D": 10},
                "aspirationalState": {"A": 10, "B": 20, "C": 30, "D": 40}
            },
            {
                "questionId": 2,
                "questionTitle": "Question 2",
                "currentState": {"A": 100, "B": 0, "C": 0, "D": 0},
                "aspirationalState": {"A": 0, "B": 0, "C": 0, "D": 100}
            }
        ],
        "completionTime": 184
    })
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn submit(app: &Router, email: &str) -> Value {
    let response = app
        .clone()
        .oneshot(post_json("/api/surveys", &submission_body(email)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn health_endpoint_responds() {
    let response = app().oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn submit_returns_id_and_redirect() {
    let app = app();
    let body = submit(&app, "jane@acme.com").await;

    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Survey submitted successfully");
    assert_eq!(body["data"]["companyName"], "Acme");

    let id = body["data"]["id"].as_str().unwrap();
    let redirect = body["data"]["redirectUrl"].as_str().unwrap();
    assert!(redirect.ends_with(id));
}

#[tokio::test]
async fn submitted_survey_is_fetchable_by_id() {
    let app = app();
    let created = submit(&app, "jane@acme.com").await;
    let id = created["data"]["id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(get(&format!("/api/surveys/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["id"], *id);
    assert_eq!(body["data"]["userDetails"]["fullName"], "Jane Doe");
    assert_eq!(body["data"]["questionResponses"][0]["currentState"]["A"], 40);
    assert_eq!(body["data"]["completionTime"], 184);
}

#[tokio::test]
async fn listing_returns_summaries_with_pagination() {
    let app = app();
    submit(&app, "jane@acme.com").await;
    submit(&app, "joe@initech.com").await;

    let response = app.clone().oneshot(get("/api/surveys")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    // Summaries carry listing fields only.
    assert!(body["data"][0].get("questionResponses").is_none());
    assert_eq!(body["pagination"]["currentPage"], 1);
    assert_eq!(body["pagination"]["totalRecords"], 2);
    assert_eq!(body["pagination"]["hasNext"], false);
    assert_eq!(body["pagination"]["hasPrev"], false);
}

#[tokio::test]
async fn listing_respects_page_and_limit() {
    let app = app();
    submit(&app, "jane@acme.com").await;
    submit(&app, "joe@acme.com").await;
    submit(&app, "jim@acme.com").await;

    let response = app
        .clone()
        .oneshot(get("/api/surveys?page=2&limit=2"))
        .await
        .unwrap();
    let body = body_json(response).await;

    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["pagination"]["currentPage"], 2);
    assert_eq!(body["pagination"]["totalPages"], 2);
    assert_eq!(body["pagination"]["hasPrev"], true);
}

#[tokio::test]
async fn company_listing_matches_substring_case_insensitively() {
    let app = app();
    submit(&app, "jane@acme.com").await;
    submit(&app, "joe@initech.com").await;

    let response = app
        .clone()
        .oneshot(get("/api/surveys/company/ACME"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["companyName"], "Acme");
    // Company rows are full submissions.
    assert!(items[0].get("questionResponses").is_some());
}

#[tokio::test]
async fn analytics_average_per_question() {
    let app = app();
    submit(&app, "jane@acme.com").await;
    submit(&app, "joe@acme.com").await;

    let response = app
        .clone()
        .oneshot(get("/api/surveys/analytics/Acme"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let analytics = &body["data"];
    assert_eq!(analytics["companyName"], "Acme");
    assert_eq!(analytics["totalResponses"], 2);

    // Identical submissions, so the averages equal the inputs.
    let q2 = &analytics["questionAnalytics"]["2"];
    assert_eq!(q2["questionTitle"], "Question 2");
    assert_eq!(q2["averages"]["current"]["A"], 100);
    assert_eq!(q2["averages"]["aspirational"]["D"], 100);
}

#[tokio::test]
async fn missing_fields_get_the_uniform_error_body() {
    let app = app();
    let response = app
        .clone()
        .oneshot(post_json("/api/surveys", &json!({"completionTime": 10})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "Missing required fields: userDetails and questionResponses"
    );
    assert_eq!(body["error"], "MALFORMED_REQUEST");
}

#[tokio::test]
async fn malformed_json_is_a_400_not_a_panic() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/surveys")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "MALFORMED_REQUEST");
}

#[tokio::test]
async fn bad_point_totals_are_rejected_with_the_question_number() {
    let app = app();
    let mut payload = submission_body("jane@acme.com");
    payload["questionResponses"][1]["currentState"]["A"] = json!(99);

    let response = app
        .clone()
        .oneshot(post_json("/api/surveys", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Question 2: Points must total exactly 100"));
}

#[tokio::test]
async fn unknown_id_is_404_and_invalid_id_is_400() {
    let app = app();

    let response = app
        .clone()
        .oneshot(get("/api/surveys/0d9ad08f-23e1-44e6-9b86-a4b2cb5e43b1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "SUBMISSION_NOT_FOUND");
    assert_eq!(body["message"], "Survey not found");

    let response = app
        .clone()
        .oneshot(get("/api/surveys/not-a-uuid"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn analytics_for_unknown_company_is_404() {
    let app = app();
    let response = app
        .clone()
        .oneshot(get("/api/surveys/analytics/Globex"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "No surveys found for this company");
    assert_eq!(body["error"], "NO_SUBMISSIONS_FOUND");
}

#[tokio::test]
async fn company_name_is_derived_from_the_email_domain() {
    let app = app();
    let body = submit(&app, "sam@globex-research.co.uk").await;
    assert_eq!(body["data"]["companyName"], "Globex-research");
}
