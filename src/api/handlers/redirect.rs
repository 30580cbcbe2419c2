//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL and counts the click.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the link by exact code
/// 2. Increment its click counter in the store
/// 3. Return 302 Found with `Location: target_url`
///
/// The click is recorded before the response is sent, so a completed
/// redirect is always reflected in the link's stats.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let target_url = match state.redirect_resolver.resolve(&code).await {
        Ok(url) => url,
        Err(e) => {
            let outcome = if matches!(e, AppError::NotFound { .. }) {
                "not_found"
            } else {
                "error"
            };
            metrics::counter!("redirects_total", "outcome" => outcome).increment(1);
            return Err(e);
        }
    };

    metrics::counter!("redirects_total", "outcome" => "redirected").increment(1);
    debug!(code = %code, "Redirecting to {}", target_url);

    let location = HeaderValue::from_str(&target_url).map_err(|_| {
        AppError::internal(
            "Stored URL is not a valid Location header",
            json!({ "code": code }),
        )
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
