//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;

use crate::api::dto::health::{DatabaseStatus, HealthResponse, SystemStatus};
use crate::state::AppState;

/// Returns service health with a store liveness check.
///
/// # Endpoint
///
/// `GET /healthz`
///
/// # Response Codes
///
/// - **200 OK**: Store reachable
/// - **503 Service Unavailable**: Store unreachable
///
/// # Response
///
/// ```json
/// {
///   "ok": true,
///   "version": "0.1.0",
///   "system": {
///     "status": "healthy",
///     "environment": "production",
///     "uptime_seconds": 3600,
///     "timestamp": "2025-01-01T00:00:00+00:00"
///   },
///   "database": { "status": "connected" }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_error = state.link_service.count_links().await.err();
    let healthy = db_error.is_none();

    let response = HealthResponse {
        ok: healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        system: SystemStatus {
            status: if healthy { "healthy" } else { "unhealthy" }.to_string(),
            environment: state.environment.clone(),
            uptime_seconds: state.started_at.elapsed().as_secs(),
            timestamp: Utc::now().to_rfc3339(),
        },
        database: DatabaseStatus {
            status: if healthy { "connected" } else { "disconnected" }.to_string(),
            error: db_error.map(|e| e.to_string()),
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        tracing::warn!("Health check failed: store unreachable");
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
