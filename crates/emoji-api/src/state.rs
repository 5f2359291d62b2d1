//! Shared application state for the API server.
//!
//! [`AppState`] owns the emoji collection. Nothing outside the state holds
//! a reference to it, so tests can build as many isolated registries as
//! they like.

use emoji_registry::EmojiCollection;
use tokio::sync::RwLock;

/// Shared state for the Axum application.
///
/// Wrapped in an `Arc` and injected via Axum's `State` extractor. Readers
/// take the read lock; mutating handlers hold the write lock until the
/// mutation is complete.
pub struct AppState {
    /// The emoji collection served by the API.
    pub registry: RwLock<EmojiCollection>,
}

impl AppState {
    /// Create application state around an existing collection.
    pub fn new(collection: EmojiCollection) -> Self {
        Self {
            registry: RwLock::new(collection),
        }
    }

    /// Create application state holding the default seed records.
    pub fn seeded() -> Self {
        Self::new(EmojiCollection::seeded())
    }

    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        self.registry.read().await.len()
    }

    /// Whether the collection is currently empty.
    pub async fn is_empty(&self) -> bool {
        self.registry.read().await.is_empty()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::seeded()
    }
}
