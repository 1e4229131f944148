use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::export::{self, ExportError};
use crate::{PlanReport, PlanRequest, Planner, PlannerError};

pub const HTTP_ADDR_ENV: &str = "STUDY_PLANNER_HTTP_ADDR";

/// Shared, read-only planner. Requests never share plan state.
#[derive(Clone)]
pub struct AppState {
    planner: Arc<Planner>,
}

impl AppState {
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(planner),
        }
    }

    fn planner(&self) -> &Planner {
        &self.planner
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

#[derive(Debug)]
enum ApiError {
    Invalid(String),
    Internal(String),
}

#[derive(Debug, Deserialize)]
struct SimulatePayload {
    request: PlanRequest,
    days: u32,
    daily_hours: f64,
}

impl From<PlannerError> for ApiError {
    fn from(value: PlannerError) -> Self {
        match value {
            PlannerError::Io(_) | PlannerError::Serialization(_) | PlannerError::Config(_) => {
                ApiError::Internal(value.to_string())
            }
            other => ApiError::Invalid(other.to_string()),
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(value: ExportError) -> Self {
        match value {
            ExportError::MissingDate(_)
            | ExportError::InvalidDayStart(_)
            | ExportError::TimelineOverflow(_) => {
                ApiError::Invalid(value.to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Invalid(message) => {
                let body = Json(ErrorBody {
                    error: "invalid_request",
                    message,
                });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            ApiError::Internal(message) => {
                warn!(%message, "request failed");
                let body = Json(ErrorBody {
                    error: "internal_error",
                    message,
                });
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/plan", post(generate_plan))
        .route("/plan/rebalance", post(rebalance_plan))
        .route("/plan/simulate", post(simulate_plan))
        .route("/plan/export/text", post(export_text))
        .route("/plan/export/topics", post(export_topics))
        .route("/plan/export/timeline", post(export_timeline))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, planner: Planner) -> std::io::Result<()> {
    let state = AppState::new(planner);
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "study planner HTTP API listening");
    axum::serve(listener, app).await
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn generate_plan(
    State(state): State<AppState>,
    Json(request): Json<PlanRequest>,
) -> Result<Json<PlanReport>, ApiError> {
    let report = state.planner().generate(&request)?;
    Ok(Json(report))
}

async fn rebalance_plan(
    State(state): State<AppState>,
    Json(request): Json<PlanRequest>,
) -> Result<Json<PlanReport>, ApiError> {
    let report = state.planner().rebalance(&request)?;
    Ok(Json(report))
}

async fn simulate_plan(
    State(state): State<AppState>,
    Json(payload): Json<SimulatePayload>,
) -> Result<Json<PlanReport>, ApiError> {
    let report = state
        .planner()
        .simulate(&payload.request, payload.days, payload.daily_hours)?;
    Ok(Json(report))
}

async fn export_text(
    State(state): State<AppState>,
    Json(request): Json<PlanRequest>,
) -> Result<Response, ApiError> {
    let report = state.planner().generate(&request)?;
    let body = export::render_text_plan(&report);
    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response())
}

async fn export_topics(
    State(state): State<AppState>,
    Json(request): Json<PlanRequest>,
) -> Result<Response, ApiError> {
    let report = state.planner().generate(&request)?;
    let mut buffer = Vec::new();
    export::write_topics_csv(&report, &mut buffer)?;
    Ok(([(header::CONTENT_TYPE, "text/csv")], buffer).into_response())
}

async fn export_timeline(
    State(state): State<AppState>,
    Json(request): Json<PlanRequest>,
) -> Result<Response, ApiError> {
    let planner = state.planner();
    let report = planner.generate(&request)?;
    let mut buffer = Vec::new();
    export::write_timeline_csv(&report, planner.config().day_start_hour, &mut buffer)?;
    Ok(([(header::CONTENT_TYPE, "text/csv")], buffer).into_response())
}
