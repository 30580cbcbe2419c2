//! Link creation, lookup, listing and deletion.

use std::sync::Arc;

use crate::application::services::code_issuer::CodeIssuer;
use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::validate_url;
use serde_json::json;

/// Aggregate numbers over all stored links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkTotals {
    pub links: i64,
    pub clicks: i64,
}

/// Service for creating and managing shortened links.
///
/// Creation validates the target URL before touching the store, obtains a
/// code from [`CodeIssuer`], then inserts. The insert may still be rejected
/// by the store's unique constraint if a concurrent request took the same
/// code in the meantime; that rejection surfaces as [`AppError::Conflict`].
pub struct LinkService<R: LinkRepository + ?Sized> {
    link_repository: Arc<R>,
    code_issuer: CodeIssuer<R>,
}

impl<R: LinkRepository + ?Sized> LinkService<R> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<R>) -> Self {
        let code_issuer = CodeIssuer::new(link_repository.clone());
        Self {
            link_repository,
            code_issuer,
        }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `target_url` - Absolute `http`/`https` URL, stored exactly as given
    /// - `code` - Optional requested code; generated when `None`
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`] if the URL is invalid (no store call is made)
    /// - [`AppError::InvalidFormat`] if the requested code is malformed
    /// - [`AppError::Conflict`] if the code is taken, before or during insert
    /// - [`AppError::GenerationExhausted`] if no free code was found
    /// - [`AppError::Internal`] on store errors
    pub async fn create_link(
        &self,
        target_url: String,
        code: Option<String>,
    ) -> Result<Link, AppError> {
        if !validate_url(&target_url) {
            return Err(AppError::invalid_url(
                "Invalid or missing URL",
                json!({ "target_url": target_url }),
            ));
        }

        let code = self.code_issuer.issue_code(code.as_deref()).await?;

        self.link_repository
            .insert(NewLink { code, target_url })
            .await
    }

    /// Retrieves a link by code without recording a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "code": code })))
    }

    /// Lists all links, newest first.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list_all().await
    }

    /// Deletes a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        self.link_repository.delete_by_code(code).await
    }

    /// Counts links. Used as the store liveness probe.
    pub async fn count_links(&self) -> Result<i64, AppError> {
        self.link_repository.count().await
    }

    /// Sums link and click counts across the whole store.
    pub async fn totals(&self) -> Result<LinkTotals, AppError> {
        let links = self.link_repository.list_all().await?;

        Ok(LinkTotals {
            links: links.len() as i64,
            clicks: links.iter().map(|l| l.clicks).sum(),
        })
    }

    /// Constructs the public short URL for a code.
    pub fn get_short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }
}
