//! Shared application state injected into every handler.

use std::sync::Arc;
use std::time::Instant;

use crate::application::services::{LinkService, RedirectResolver};
use crate::domain::repositories::LinkRepository;

/// Handles to the services plus the few settings handlers need.
///
/// Services are built over `dyn LinkRepository` so the same router runs on
/// PostgreSQL in production and on the in-memory store in tests.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn LinkRepository>>,
    pub redirect_resolver: Arc<RedirectResolver<dyn LinkRepository>>,
    /// Public prefix used to build `shortUrl` values.
    pub base_url: String,
    /// Environment name reported by the health endpoint.
    pub environment: String,
    pub started_at: Instant,
}

impl AppState {
    /// Builds the state around a single store.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        base_url: impl Into<String>,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(link_repository.clone())),
            redirect_resolver: Arc::new(RedirectResolver::new(link_repository)),
            base_url: base_url.into(),
            environment: environment.into(),
            started_at: Instant::now(),
        }
    }
}
