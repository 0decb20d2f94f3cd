//! HTTP API module
//!
//! This module forwards pointer and button events from a presentation layer
//! into the wheel and serves its state back as JSON.

pub mod handlers;
pub mod responses;

use std::{sync::Arc, time::Instant};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::TickWheel;
use handlers::*;

/// Shared state behind the HTTP router
#[derive(Debug)]
pub struct ServerState {
    pub wheel: Arc<TickWheel>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
}

impl ServerState {
    pub fn new(wheel: Arc<TickWheel>, port: u16, host: String) -> Self {
        Self {
            wheel,
            start_time: Instant::now(),
            port,
            host,
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/drag/start", post(drag_start_handler))
        .route("/drag/move", post(drag_move_handler))
        .route("/drag/end", post(drag_end_handler))
        .route("/toggle", post(toggle_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
