//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub version: String,
    pub system: SystemStatus,
    pub database: DatabaseStatus,
}

/// Process-level status.
#[derive(Debug, Serialize)]
pub struct SystemStatus {
    pub status: String,
    pub environment: String,
    pub uptime_seconds: u64,
    pub timestamp: String,
}

/// Store connectivity status: `connected` or `disconnected`.
#[derive(Debug, Serialize)]
pub struct DatabaseStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
