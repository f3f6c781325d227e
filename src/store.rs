use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};
use crate::models::EmbedRecord;

/// Optional bounds on the store. The default is unbounded with no expiry,
/// matching a plain process-lifetime map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StoreLimits {
    pub max_embeds: Option<usize>,
    pub ttl: Option<Duration>,
}

struct Entry {
    record: Arc<EmbedRecord>,
    inserted_at: Instant,
}

impl Entry {
    fn is_live(&self, ttl: Option<Duration>) -> bool {
        ttl.map_or(true, |ttl| self.inserted_at.elapsed() < ttl)
    }
}

#[derive(Default)]
struct Inner {
    entries: HashMap<String, Entry>,
    /// Ids in insertion order, oldest first. Always the same set as `entries`.
    order: VecDeque<String>,
}

impl Inner {
    fn pop_oldest(&mut self) -> Option<String> {
        let id = self.order.pop_front()?;
        self.entries.remove(&id);
        Some(id)
    }

    /// Entries share one TTL, so expired ones are always at the front.
    fn prune_expired(&mut self, ttl: Option<Duration>) {
        if ttl.is_none() {
            return;
        }
        loop {
            let expired = match self.order.front() {
                Some(id) => self
                    .entries
                    .get(id)
                    .map_or(true, |entry| !entry.is_live(ttl)),
                None => false,
            };
            if !expired {
                break;
            }
            if let Some(id) = self.pop_oldest() {
                tracing::debug!(embed_id = %id, "Expired embed pruned");
            }
        }
    }
}

/// In-memory embed store keyed by embed id.
///
/// Cheaply cloneable; all clones share the same underlying map via `Arc`.
/// Nothing is persisted; a restart starts from an empty store.
#[derive(Clone, Default)]
pub struct EmbedStore {
    inner: Arc<RwLock<Inner>>,
    limits: StoreLimits,
}

impl EmbedStore {
    pub fn new(limits: StoreLimits) -> Self {
        EmbedStore {
            inner: Arc::default(),
            limits,
        }
    }

    /// Insert a fully built record under its id.
    ///
    /// The record becomes visible to readers all at once. An id that is
    /// already present is rejected with `Conflict` and the existing record is
    /// left untouched. When the store is at `max_embeds`, the oldest record
    /// is evicted to make room.
    pub async fn insert(&self, record: EmbedRecord) -> AppResult<Arc<EmbedRecord>> {
        let mut inner = self.inner.write().await;
        inner.prune_expired(self.limits.ttl);

        if inner.entries.contains_key(&record.id) {
            return Err(AppError::Conflict(format!(
                "Embed id {} already exists",
                record.id
            )));
        }

        if let Some(max) = self.limits.max_embeds {
            while inner.entries.len() >= max {
                match inner.pop_oldest() {
                    Some(id) => tracing::debug!(embed_id = %id, "Store full, evicted oldest embed"),
                    None => break,
                }
            }
        }

        let record = Arc::new(record);
        inner.order.push_back(record.id.clone());
        inner.entries.insert(
            record.id.clone(),
            Entry {
                record: Arc::clone(&record),
                inserted_at: Instant::now(),
            },
        );
        Ok(record)
    }

    pub async fn get(&self, id: &str) -> Option<Arc<EmbedRecord>> {
        let inner = self.inner.read().await;
        inner
            .entries
            .get(id)
            .filter(|entry| entry.is_live(self.limits.ttl))
            .map(|entry| Arc::clone(&entry.record))
    }

    /// Every live record, oldest first.
    pub async fn all(&self) -> Vec<Arc<EmbedRecord>> {
        let inner = self.inner.read().await;
        inner
            .order
            .iter()
            .filter_map(|id| inner.entries.get(id))
            .filter(|entry| entry.is_live(self.limits.ttl))
            .map(|entry| Arc::clone(&entry.record))
            .collect()
    }

    pub async fn len(&self) -> usize {
        let inner = self.inner.read().await;
        match self.limits.ttl {
            None => inner.entries.len(),
            Some(ttl) => inner
                .entries
                .values()
                .filter(|entry| entry.is_live(Some(ttl)))
                .count(),
        }
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
