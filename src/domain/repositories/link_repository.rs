//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Store contract for links.
///
/// The store owns every invariant that needs coordination between
/// concurrent requests: code uniqueness and click counting. Callers never
/// compute counter values themselves.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - Process-local implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Returns true if a link with this exact code exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn exists(&self, code: &str) -> Result<bool, AppError>;

    /// Inserts a new link with `clicks = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code is already taken. Existing
    /// links are never overwritten.
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by exact code match.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Adds one to `clicks` and sets `last_clicked_at` and `updated_at` to now.
    ///
    /// The increment is applied by the store as a relative delta, so
    /// concurrent calls never lose updates.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    /// Returns [`AppError::Internal`] on store errors.
    async fn increment_clicks(&self, code: &str) -> Result<(), AppError>;

    /// Lists every link, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn list_all(&self) -> Result<Vec<Link>, AppError>;

    /// Deletes a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    /// Returns [`AppError::Internal`] on store errors.
    async fn delete_by_code(&self, code: &str) -> Result<(), AppError>;

    /// Counts all links. Cheap enough to double as a liveness probe.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn count(&self) -> Result<i64, AppError>;
}
