//! Handlers for link management endpoints (create, list, show, delete).

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::link::{CreateLinkRequest, LinkResponse};
use crate::domain::entities::Link;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::validate_url;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "targetUrl": "https://example.com/page",
///   "code": "promo24"   // optional, [A-Za-z0-9]{6,8}
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the stored link.
///
/// # Errors
///
/// - 400 `invalid_url` if `targetUrl` is missing, not a string, or not an http/https URL
/// - 400 `invalid_format` if `code` is malformed or the body is not a JSON object
/// - 409 `conflict` if `code` is taken
/// - 500 `generation_exhausted` if no free code could be generated
///
/// The URL is checked before the code, so a request with both wrong reports
/// `invalid_url`.
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let Json(payload) = payload?;

    let target_url = payload
        .target_url
        .clone()
        .filter(|url| validate_url(url))
        .ok_or_else(|| {
            AppError::invalid_url(
                "Invalid or missing URL",
                json!({ "target_url": payload.target_url }),
            )
        })?;

    payload.validate()?;

    let link = state
        .link_service
        .create_link(target_url, payload.code)
        .await?;

    metrics::counter!("links_created_total").increment(1);
    tracing::info!(code = %link.code, target_url = %link.target_url, "Link created");

    Ok((StatusCode::CREATED, Json(to_response(&state, link))))
}

/// Lists all links, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(
        links
            .into_iter()
            .map(|link| to_response(&state, link))
            .collect(),
    ))
}

/// Returns a single link with its click statistics.
///
/// Viewing stats does not count as a click.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist.
pub async fn get_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_link(&code).await?;

    Ok(Json(to_response(&state, link)))
}

/// Deletes a link permanently.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete_link(&code).await?;

    metrics::counter!("links_deleted_total").increment(1);
    tracing::info!(code = %code, "Link deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn to_response(state: &AppState, link: Link) -> LinkResponse {
    let short_url = state.link_service.get_short_url(&state.base_url, &link.code);
    LinkResponse::from_link(link, short_url)
}
