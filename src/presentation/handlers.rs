// HTTP request handlers
use crate::application::image_service::DashError;
use crate::domain::error::LayoutError;
use crate::domain::section::DashboardRequest;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Render a dashboard request into its module image
pub async fn put_dashboard(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DashboardRequest>,
) -> Response {
    match state.image_service.create(&request).await {
        Ok(created) => (
            StatusCode::CREATED,
            Json(json!({
                "file": created.path.display().to_string(),
                "skipped": created.skipped,
            })),
        )
            .into_response(),
        Err(e) => error_response(&request.module, e),
    }
}

/// Remove a module's image
pub async fn delete_dashboard(
    Path(module): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match state.image_service.delete(&module).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(&module, e),
    }
}

fn error_response(module: &str, error: DashError) -> Response {
    let status = match &error {
        DashError::InvalidModule(_) => StatusCode::BAD_REQUEST,
        DashError::Layout(LayoutError::CapacityExceeded { .. }) => StatusCode::PAYLOAD_TOO_LARGE,
        DashError::Layout(LayoutError::DegenerateGaugeRange { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
        e if e.is_not_found() => StatusCode::NOT_FOUND,
        DashError::Encode(_) | DashError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        tracing::error!(module, "request failed: {:#}", error);
    } else {
        tracing::warn!(module, "request rejected: {}", error);
    }
    (status, Json(json!({ "error": error.to_string() }))).into_response()
}
