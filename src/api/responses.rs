//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::WheelSnapshot;

/// API response structure for wheel input endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Phase of the wheel after the input was applied
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub wheel: WheelSnapshot,
}

impl ApiResponse {
    /// Create a response reporting the wheel's phase as its status
    pub fn new(message: impl Into<String>, wheel: WheelSnapshot) -> Self {
        Self {
            status: wheel.phase.as_str().to_string(),
            message: message.into(),
            timestamp: Utc::now(),
            wheel,
        }
    }
}

/// Status response with server information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub wheel: WheelSnapshot,
    pub uptime: String,
    pub port: u16,
    pub host: String,
}

/// Error body returned for rejected inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
