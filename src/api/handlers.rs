//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::{error, info, warn};

use crate::{
    error::WheelError,
    geometry::Offset,
    state::ToggleOutcome,
};
use super::{
    responses::{ApiResponse, ErrorResponse, HealthResponse, StatusResponse},
    ServerState,
};

type HandlerResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

/// Map a wheel error onto an HTTP error response
fn reject(action: &str, e: WheelError) -> (StatusCode, Json<ErrorResponse>) {
    let status = if e.is_contract_breach() {
        warn!("Rejected {}: {}", action, e);
        StatusCode::CONFLICT
    } else {
        error!("Failed to {}: {}", action, e);
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(ErrorResponse::new(e.to_string())))
}

/// Handle POST /drag/start - Pointer down at a point relative to the dial centre
pub async fn drag_start_handler(
    State(state): State<Arc<ServerState>>,
    Json(point): Json<Offset>,
) -> HandlerResult<ApiResponse> {
    match state.wheel.start_drag(point) {
        Ok(wheel) => Ok(Json(ApiResponse::new("Drag started", wheel))),
        Err(e) => Err(reject("start drag", e)),
    }
}

/// Handle POST /drag/move - Pointer moved by a delta
pub async fn drag_move_handler(
    State(state): State<Arc<ServerState>>,
    Json(delta): Json<Offset>,
) -> HandlerResult<ApiResponse> {
    match state.wheel.on_drag(delta) {
        Ok(wheel) => Ok(Json(ApiResponse::new("Drag moved", wheel))),
        Err(e) => Err(reject("move drag", e)),
    }
}

/// Handle POST /drag/end - Pointer up or gesture cancelled
pub async fn drag_end_handler(State(state): State<Arc<ServerState>>) -> HandlerResult<ApiResponse> {
    match state.wheel.end_drag() {
        Ok(wheel) => Ok(Json(ApiResponse::new("Drag ended", wheel))),
        Err(e) => Err(reject("end drag", e)),
    }
}

/// Handle POST /toggle - Start or pause the countdown
pub async fn toggle_handler(State(state): State<Arc<ServerState>>) -> HandlerResult<ApiResponse> {
    match state.wheel.toggle() {
        Ok((outcome, wheel)) => {
            let message = match outcome {
                ToggleOutcome::Started => "Countdown started",
                ToggleOutcome::Paused => "Countdown paused",
                ToggleOutcome::Ignored => "Nothing to count down",
            };
            info!("Toggle endpoint called - {}", message.to_lowercase());
            Ok(Json(ApiResponse::new(message, wheel)))
        }
        Err(e) => Err(reject("toggle countdown", e)),
    }
}

/// Handle GET /status - Return current wheel status
pub async fn status_handler(State(state): State<Arc<ServerState>>) -> HandlerResult<StatusResponse> {
    let wheel = state
        .wheel
        .snapshot()
        .map_err(|e| reject("read wheel state", e))?;

    Ok(Json(StatusResponse {
        wheel,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
