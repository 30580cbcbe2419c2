//! Redirect resolution with click tracking.

use std::sync::Arc;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use serde_json::json;

/// Resolves codes to target URLs and records each access.
///
/// Resolution is a read followed by a separate store-side increment. The
/// increment is a relative delta applied by the store, so concurrent
/// resolutions of one code add up exactly; nothing is counted in process.
pub struct RedirectResolver<R: LinkRepository + ?Sized> {
    link_repository: Arc<R>,
}

impl<R: LinkRepository + ?Sized> RedirectResolver<R> {
    pub fn new(link_repository: Arc<R>) -> Self {
        Self { link_repository }
    }

    /// Returns the target URL for `code` after counting the click.
    ///
    /// Any non-empty code is looked up verbatim; format validation is not
    /// applied on read.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidFormat`] if `code` is empty
    /// - [`AppError::NotFound`] if no link has this code, including when the
    ///   link is deleted between the read and the increment
    /// - [`AppError::Internal`] on store errors
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        if code.is_empty() {
            return Err(AppError::invalid_format("Invalid code", json!({})));
        }

        let link = self
            .link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "code": code })))?;

        self.link_repository.increment_clicks(code).await?;

        Ok(link.target_url)
    }
}
