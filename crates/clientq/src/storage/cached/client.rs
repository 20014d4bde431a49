//! Read-through client lookup.
//!
//! Every step of one lookup (cache read, store read, cache write) runs on the
//! execution context captured when the lookup starts, and strictly in that
//! order. Cache problems only cost latency; store problems fail the lookup.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use clientq_core::cache::{client_key, deserialize_client, serialize_client, Cache};
use clientq_core::client::{Client, Document};
use clientq_core::lookup::{ClientLookup, LookupError, LookupOutcome, Result};
use clientq_core::storage::ClientRepository;

use crate::context::{ContextError, ContextHandle};

/// Read-through lookup over a cache and a durable client store.
///
/// There is no request coalescing: concurrent misses for the same document
/// each query the store and each write the cache.
///
/// # Type Parameters
///
/// * `R` - The durable store implementation
/// * `C` - The cache implementation
pub struct ReadThroughLookup<R, C>
where
    R: ClientRepository,
    C: Cache,
{
    repository: Arc<R>,
    cache: Arc<C>,
    context: ContextHandle,
    ttl: Option<Duration>,
}

impl<R, C> ReadThroughLookup<R, C>
where
    R: ClientRepository + 'static,
    C: Cache + 'static,
{
    /// Creates a new read-through lookup.
    ///
    /// # Arguments
    ///
    /// * `repository` - The authoritative client store
    /// * `cache` - The cache tier
    /// * `context` - Context used when a lookup starts outside of any context
    ///
    /// Cache entries are written without expiry unless [`with_ttl`](Self::with_ttl) says otherwise.
    pub fn new(repository: Arc<R>, cache: Arc<C>, context: ContextHandle) -> Self {
        Self {
            repository,
            cache,
            context,
            ttl: None,
        }
    }

    /// Sets the TTL for cache writes. `None` keeps entries until evicted.
    pub fn with_ttl(mut self, ttl: Option<Duration>) -> Self {
        self.ttl = ttl;
        self
    }

    fn capture_context(&self) -> ContextHandle {
        ContextHandle::current().unwrap_or_else(|| self.context.clone())
    }

    /// Reads the cache. Failures and undecodable entries count as a miss.
    async fn read_cache(
        &self,
        ctx: &ContextHandle,
        key: &str,
        document: &Document,
    ) -> Result<Option<Client>> {
        let cache = Arc::clone(&self.cache);
        let cache_key = key.to_string();

        let cached = ctx
            .run(move || async move { cache.get(&cache_key).await })
            .await
            .map_err(context_unavailable)?;

        match cached {
            Ok(Some(bytes)) => match deserialize_client(&bytes) {
                Ok(client) => Ok(Some(client)),
                Err(err) => {
                    tracing::warn!(%document, error = %err, "Cache entry deserialization failed");
                    Ok(None)
                }
            },
            Ok(None) => {
                tracing::trace!(%document, "Cache miss for client");
                Ok(None)
            }
            Err(err) => {
                tracing::warn!(%document, error = %err, "Cache read failed, falling back to store");
                Ok(None)
            }
        }
    }

    async fn read_store(&self, ctx: &ContextHandle, document: &Document) -> Result<Option<Client>> {
        let repository = Arc::clone(&self.repository);
        let doc = document.clone();

        let found = ctx
            .run(move || async move { repository.get_client_by_document(&doc).await })
            .await
            .map_err(context_unavailable)?;

        found.map_err(|err| {
            tracing::error!(%document, error = %err, "Store lookup failed");
            LookupError::from(err)
        })
    }

    /// Schedules the cache write and returns without waiting for it.
    fn populate_cache(&self, ctx: &ContextHandle, key: String, client: &Client) {
        let bytes = match serialize_client(client) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(document = %client.document, error = %err, "Client serialization failed, skipping cache");
                return;
            }
        };

        let cache = Arc::clone(&self.cache);
        let ttl = self.ttl;
        let document = client.document.clone();

        let scheduled = ctx.spawn_detached(move || async move {
            match cache.set(&key, &bytes, ttl).await {
                Ok(()) => tracing::debug!(%document, "Client stored in cache"),
                Err(err) => tracing::warn!(%document, error = %err, "Failed to cache client"),
            }
        });

        if let Err(err) = scheduled {
            tracing::warn!(document = %client.document, error = %err, "Failed to schedule cache write");
        }
    }
}

fn context_unavailable(err: ContextError) -> LookupError {
    LookupError::ContextUnavailable(err.to_string())
}

#[async_trait]
impl<R, C> ClientLookup for ReadThroughLookup<R, C>
where
    R: ClientRepository + 'static,
    C: Cache + 'static,
{
    async fn lookup_with_source(&self, document: &Document) -> Result<LookupOutcome> {
        let ctx = self.capture_context();
        let key = client_key(document);

        if let Some(client) = self.read_cache(&ctx, &key, document).await? {
            tracing::debug!(%document, "Cache hit for client");
            return Ok(LookupOutcome::from_cache(client));
        }

        let Some(client) = self.read_store(&ctx, document).await? else {
            tracing::debug!(%document, "Client not found in cache or store");
            return Ok(LookupOutcome::not_found());
        };

        tracing::debug!(%document, "Client loaded from store");
        self.populate_cache(&ctx, key, &client);

        Ok(LookupOutcome::from_store(client))
    }
}
