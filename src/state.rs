use std::sync::Arc;

use crate::{config::Config, id::generate_embed_id, store::EmbedStore};

/// Shared application state passed to all handlers.
/// The store is built once at startup and injected here; it lives for the
/// life of the process and is never persisted.
#[derive(Clone)]
pub struct AppState {
    pub store: EmbedStore,
    pub config: Arc<Config>,
    /// Produces candidate embed ids for `/create`.
    pub id_source: fn() -> String,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let limits = config.store_limits();
        tracing::info!(
            max_embeds = ?limits.max_embeds,
            ttl_secs = ?limits.ttl.map(|t| t.as_secs()),
            "Embed store initialized"
        );

        AppState {
            store: EmbedStore::new(limits),
            config: Arc::new(config),
            id_source: generate_embed_id,
        }
    }

    /// Swap the id generator, e.g. for a deterministic one in tests.
    pub fn with_id_source(mut self, id_source: fn() -> String) -> Self {
        self.id_source = id_source;
        self
    }
}
