use crate::dashboard;
use crate::error::{ProfileAnalyzerError, Result};
use crate::github::ProfileSource;
use crate::models::{AnalysisOutcome, ProfileAnalysis};
use crate::pipeline::analyze_profile;
use crate::report::REPORT_MIME_TYPE;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Shared state for the HTTP surface
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn ProfileSource>,
}

#[derive(Debug, Deserialize)]
pub struct DashboardParams {
    pub username: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Liveness check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub status: String,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/api/users/:login", get(analysis_json))
        .route("/api/users/:login/report", get(report_download))
        .route("/healthz", get(liveness_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(state: AppState, port: u16) -> Result<()> {
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Dashboard listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| ProfileAnalyzerError::ServerError(e.to_string()))
}

fn error_json(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Runs the pipeline, mapping the non-report outcomes to HTTP responses.
async fn run_analysis(state: &AppState, login: &str) -> std::result::Result<ProfileAnalysis, Response> {
    match analyze_profile(state.source.as_ref(), login).await {
        Ok(AnalysisOutcome::Found(analysis)) => Ok(*analysis),
        Ok(AnalysisOutcome::AccountNotFound) => {
            Err(error_json(StatusCode::NOT_FOUND, dashboard::NOT_FOUND_MESSAGE))
        }
        Err(ProfileAnalyzerError::InvalidIdentifier(_)) => {
            Err(error_json(StatusCode::BAD_REQUEST, dashboard::INVALID_USERNAME_MESSAGE))
        }
        Err(e) => {
            error!(login, error = %e, "analysis failed");
            Err(error_json(StatusCode::BAD_GATEWAY, e.to_string()))
        }
    }
}

async fn analysis_json(State(state): State<AppState>, Path(login): Path<String>) -> Response {
    match run_analysis(&state, &login).await {
        Ok(analysis) => Json(analysis).into_response(),
        Err(response) => response,
    }
}

async fn report_download(State(state): State<AppState>, Path(login): Path<String>) -> Response {
    let analysis = match run_analysis(&state, &login).await {
        Ok(analysis) => analysis,
        Err(response) => return response,
    };

    let disposition = format!("attachment; filename=\"{}\"", analysis.report_filename());
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, REPORT_MIME_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        analysis.report(),
    )
        .into_response()
}

async fn dashboard_page(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Response {
    let username = match params.username {
        None => return Html(dashboard::render_page("", "")).into_response(),
        Some(username) => username.trim().to_string(),
    };

    if username.is_empty() {
        let body = dashboard::render_message("warning", dashboard::EMPTY_USERNAME_MESSAGE);
        return Html(dashboard::render_page("", &body)).into_response();
    }

    let (status, body) = match analyze_profile(state.source.as_ref(), &username).await {
        Ok(AnalysisOutcome::Found(analysis)) => (StatusCode::OK, dashboard::render_html(&analysis)),
        Ok(AnalysisOutcome::AccountNotFound) => (
            StatusCode::NOT_FOUND,
            dashboard::render_message("error", dashboard::NOT_FOUND_MESSAGE),
        ),
        Err(ProfileAnalyzerError::InvalidIdentifier(_)) => (
            StatusCode::BAD_REQUEST,
            dashboard::render_message("error", dashboard::INVALID_USERNAME_MESSAGE),
        ),
        Err(e) => {
            error!(login = %username, error = %e, "analysis failed");
            (
                StatusCode::BAD_GATEWAY,
                dashboard::render_message("error", &format!("GitHub request failed: {}", e)),
            )
        }
    };

    (status, Html(dashboard::render_page(&username, &body))).into_response()
}

async fn liveness_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(LivenessResponse {
            status: "alive".to_string(),
        }),
    )
}
