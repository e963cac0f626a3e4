//! Workplace Pulse server binary.
//!
//! Loads configuration, connects to PostgreSQL, wires the handlers, and
//! serves the survey API.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing::info;
use tracing_subscriber::EnvFilter;

use workplace_pulse::adapters::http::{api_router, SurveyHandlers};
use workplace_pulse::adapters::postgres::PostgresSubmissionRepository;
use workplace_pulse::application::handlers::survey::{
    CompanyAnalyticsHandler, GetSurveyHandler, ListCompanySurveysHandler, ListSurveysHandler,
    SubmitSurveyHandler,
};
use workplace_pulse::config::AppConfig;
use workplace_pulse::ports::SubmissionRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    info!(
        environment = ?config.server.environment,
        "starting workplace-pulse"
    );

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let repository: Arc<dyn SubmissionRepository> =
        Arc::new(PostgresSubmissionRepository::new(pool));

    let handlers = SurveyHandlers::new(
        Arc::new(SubmitSurveyHandler::new(
            repository.clone(),
            config.survey.clone(),
        )),
        Arc::new(ListSurveysHandler::new(repository.clone())),
        Arc::new(GetSurveyHandler::new(repository.clone())),
        Arc::new(ListCompanySurveysHandler::new(repository.clone())),
        Arc::new(CompanyAnalyticsHandler::new(repository)),
        config.survey.clone(),
    );

    let app = api_router(handlers, &config.server);
    let addr = config.server.socket_addr();

    info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
