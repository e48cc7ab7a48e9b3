//! Loading and saving store collections.

use lustre_cache::Cache;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::CommerceError;

/// Read the collection stored under `key`.
///
/// Missing or unreadable content yields an empty collection; corrupt state is
/// logged and otherwise ignored.
pub(crate) fn load_or_empty<T: DeserializeOwned>(cache: &Cache, key: &str) -> Vec<T> {
    match cache.get::<Vec<T>>(key) {
        Ok(Some(items)) => {
            tracing::debug!(key, count = items.len(), "rehydrated stored collection");
            items
        }
        Ok(None) => Vec::new(),
        Err(e) => {
            tracing::warn!(key, error = %e, "discarding unreadable stored collection");
            Vec::new()
        }
    }
}

/// Replace the collection stored under `key`.
pub(crate) fn save<T: Serialize>(cache: &Cache, key: &str, items: &[T]) -> Result<(), CommerceError> {
    cache.set(key, items)?;
    tracing::trace!(key, count = items.len(), "persisted collection");
    Ok(())
}
