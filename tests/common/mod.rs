#![allow(dead_code)]

use axum::extract::Request;
use axum::{Router, ServiceExt};
use axum_test::TestServer;
use shortlink::domain::entities::{Link, NewLink};
use shortlink::domain::repositories::LinkRepository;
use shortlink::infrastructure::persistence::InMemoryLinkRepository;
use shortlink::routes::{app_router, router};
use shortlink::state::AppState;
use std::sync::Arc;

pub const BASE_URL: &str = "http://sho.rt";

pub fn create_test_state(repo: Arc<dyn LinkRepository>) -> AppState {
    AppState::new(repo, BASE_URL, "test")
}

/// Full router over a fresh in-memory store, plus a handle to that store.
pub fn create_test_app() -> (Router, InMemoryLinkRepository) {
    let repo = InMemoryLinkRepository::new();
    let state = create_test_state(Arc::new(repo.clone()));
    (router(state), repo)
}

pub fn create_test_server() -> (TestServer, InMemoryLinkRepository) {
    let (app, repo) = create_test_app();
    (TestServer::new(app).unwrap(), repo)
}

pub async fn create_test_link(repo: &InMemoryLinkRepository, code: &str, url: &str) -> Link {
    repo.insert(NewLink {
        code: code.to_string(),
        target_url: url.to_string(),
    })
    .await
    .unwrap()
}

/// Server over the production router, trailing-slash normalization included.
pub fn create_normalized_test_server() -> (TestServer, InMemoryLinkRepository) {
    let repo = InMemoryLinkRepository::new();
    let state = create_test_state(Arc::new(repo.clone()));
    let app = ServiceExt::<Request>::into_make_service(app_router(state));
    (TestServer::new(app).unwrap(), repo)
}
