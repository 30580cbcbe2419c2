//! Process-local implementation of link repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// In-memory link store backed by a sharded concurrent map.
///
/// Mirrors the PostgreSQL semantics: inserts go through the map's entry API
/// so a taken code is rejected rather than overwritten, and increments
/// mutate the entry under its shard lock.
#[derive(Clone, Default)]
pub struct InMemoryLinkRepository {
    links: Arc<DashMap<String, Link>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn exists(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.links.contains_key(code))
    }

    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        match self.links.entry(new_link.code.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(
                "Code already exists",
                json!({ "code": new_link.code }),
            )),
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
                let link = Link::new(id, new_link.code, new_link.target_url, Utc::now());
                slot.insert(link.clone());
                Ok(link)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.get(code).map(|entry| entry.value().clone()))
    }

    async fn increment_clicks(&self, code: &str) -> Result<(), AppError> {
        let mut entry = self
            .links
            .get_mut(code)
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "code": code })))?;

        let now = Utc::now();
        entry.clicks += 1;
        entry.last_clicked_at = Some(now);
        entry.updated_at = now;

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        let mut links: Vec<Link> = self
            .links
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        links.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(links)
    }

    async fn delete_by_code(&self, code: &str) -> Result<(), AppError> {
        self.links
            .remove(code)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "code": code })))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.links.len() as i64)
    }
}
