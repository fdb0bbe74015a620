//! RSG REST API server binary.
//!
//! ## Purpose
//! Accepts screening measurements uploaded by the retinal-imaging device and
//! answers with the generated clinical report. The caller (device agent or
//! clinic integration) owns onward delivery to the dashboard.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{HealthRes, HealthService};
use rsg_core::{Report, ReportGenerator, RiskTier, ScreeningMeasurement, Urgency, VitalSigns};

/// Application state for the REST API server
///
/// Contains shared state that needs to be accessible to all request handlers,
/// currently the report generator for screening operations.
#[derive(Clone)]
struct AppState {
    generator: ReportGenerator,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, create_report),
    components(schemas(
        HealthRes,
        ScreeningMeasurement,
        Report,
        VitalSigns,
        RiskTier,
        Urgency
    ))
)]
struct ApiDoc;

/// Main entry point for the RSG REST API server
///
/// Starts the REST API server on the configured address (default:
/// 0.0.0.0:3000). Provides HTTP endpoints for report generation with
/// OpenAPI/Swagger documentation.
///
/// # Environment Variables
/// - `RSG_REST_ADDR`: Server address (default: "0.0.0.0:3000")
///
/// # Returns
/// * `Ok(())` - If server starts and runs successfully
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("RSG_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("-- Starting RSG REST API on {}", addr);

    let state = AppState {
        generator: ReportGenerator::new(),
    };

    let app = Router::new()
        .route("/health", get(health))
        .route("/reports", post(create_report))
        .merge(
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Returns the current health status of the RSG REST API service.
/// This endpoint is used for monitoring and load balancer health checks.
///
/// # Returns
/// * `Json<HealthRes>` - Health status response containing service status
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/reports",
    request_body = ScreeningMeasurement,
    responses(
        (status = 200, description = "Report generated", body = Report),
        (status = 400, description = "Invalid measurement"),
        (status = 500, description = "Internal server error")
    )
)]
/// Generate a clinical report from a screening measurement
///
/// Classifies the uploaded measurement and returns the full report record.
/// The report is returned to the caller and not stored or forwarded here;
/// delivery to the clinic dashboard is the caller's responsibility.
///
/// # Arguments
/// * `measurement` - Request body containing the five screening fields
///
/// # Returns
/// * `Ok(Json<Report>)` - The generated report
/// * `Err((StatusCode, String))` - Validation failure naming the offending
///   field and constraint
///
/// # Errors
/// Returns `400 Bad Request` if:
/// - the risk score is outside [0.0, 1.0].
#[axum::debug_handler]
async fn create_report(
    State(state): State<AppState>,
    Json(measurement): Json<ScreeningMeasurement>,
) -> Result<Json<Report>, (StatusCode, String)> {
    match state.generator.generate(&measurement) {
        Ok(report) => Ok(Json(report)),
        Err(e) => {
            // Every ReportError is a validation failure; the message names the
            // offending field and constraint.
            tracing::warn!("Rejected measurement: {}", e);
            Err((StatusCode::BAD_REQUEST, e.to_string()))
        }
    }
}
