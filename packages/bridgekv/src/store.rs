//! Store facade: point operations, validation, batch dispatch, and iterator
//! construction.

use std::collections::HashMap;
use std::sync::Arc;

use futures_util::future;
use serde::{Deserialize, Serialize};

use crate::bridge::StorageBridge;
use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::iter::{EntryIterator, IterOptions, KeyIterator, ValueIterator};

/// A single operation inside a [`BridgeStore::batch`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BatchOperation {
    /// Write `key` to `value`.
    Put { key: String, value: String },
    /// Delete `key` (emulated as a write of the empty string).
    Del { key: String },
}

/// Ordered key-value storage facade over a [`StorageBridge`].
///
/// Cheap to clone; clones share the underlying bridge. The store holds no
/// state of its own beyond its configuration — all data lives on the remote
/// service, and iterators own their caches individually.
#[derive(Clone)]
pub struct BridgeStore {
    bridge: Arc<dyn StorageBridge>,
    config: StoreConfig,
}

impl BridgeStore {
    /// Creates a store with the default limits.
    #[must_use]
    pub fn new(bridge: Arc<dyn StorageBridge>) -> Self {
        Self::with_config(bridge, StoreConfig::default())
    }

    /// Creates a store with explicit limits.
    #[must_use]
    pub fn with_config(bridge: Arc<dyn StorageBridge>, config: StoreConfig) -> Self {
        Self { bridge, config }
    }

    /// The limits this store enforces.
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Write one key.
    ///
    /// Size limits are checked first; an oversized key or value is rejected
    /// without touching the remote service.
    pub async fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if key.len() > self.config.key_size_limit {
            return Err(StoreError::InvalidKey {
                size: key.len(),
                limit: self.config.key_size_limit,
            });
        }
        if value.len() > self.config.value_size_limit {
            return Err(StoreError::InvalidValue {
                size: value.len(),
                limit: self.config.value_size_limit,
            });
        }
        tracing::debug!(key, "storing value");
        self.bridge.set(key, value).await.map_err(StoreError::Remote)
    }

    /// Read one key, failing with [`StoreError::NotFound`] if it is absent.
    pub async fn get(&self, key: &str) -> Result<String, StoreError> {
        let keys = [key.to_string()];
        let records = self.bridge.get(&keys).await.map_err(StoreError::Remote)?;
        match records.into_iter().next() {
            Some(record) => Ok(record.value),
            None => Err(StoreError::NotFound(key.to_string())),
        }
    }

    /// Resolve many keys with a single remote call.
    ///
    /// The result has the same length and order as `keys`; an absent key
    /// yields `None` at its position and is never an error.
    pub async fn get_many(&self, keys: &[String]) -> Result<Vec<Option<String>>, StoreError> {
        let records = self.bridge.get(keys).await.map_err(StoreError::Remote)?;
        let found: HashMap<String, String> = records
            .into_iter()
            .map(|record| (record.key, record.value))
            .collect();
        Ok(keys.iter().map(|key| found.get(key).cloned()).collect())
    }

    /// Delete one key.
    ///
    /// The remote service has no delete primitive, so deletion is emulated
    /// as a write of the empty string: the key stays enumerable by the key
    /// listing and reads back as `""`, not as absent. Callers that need to
    /// tell "deleted" from "never existed" must track that themselves.
    pub async fn delete(&self, key: &str) -> Result<(), StoreError> {
        tracing::debug!(key, "deleting value");
        self.bridge.set(key, "").await.map_err(StoreError::Remote)
    }

    /// Run a set of put/delete operations concurrently and wait for all of
    /// them.
    ///
    /// Not atomic: the first failure is surfaced and ends the wait, but
    /// operations that already completed stay applied and are not rolled
    /// back. No ordering is guaranteed between operations in one call.
    pub async fn batch(&self, operations: Vec<BatchOperation>) -> Result<(), StoreError> {
        tracing::debug!(operations = operations.len(), "dispatching batch");
        let ops = operations.into_iter().map(|operation| {
            let store = self.clone();
            async move {
                match operation {
                    BatchOperation::Put { key, value } => store.put(&key, &value).await,
                    BatchOperation::Del { key } => store.delete(&key).await,
                }
            }
        });
        future::try_join_all(ops).await?;
        Ok(())
    }

    /// Lazily iterate all keys in remote listing order.
    #[must_use]
    pub fn keys(&self, options: IterOptions) -> KeyIterator {
        KeyIterator::new(Arc::clone(&self.bridge), &self.config, options)
    }

    /// Lazily iterate `(key, value)` entries.
    #[must_use]
    pub fn entries(&self, options: IterOptions) -> EntryIterator {
        EntryIterator::new(self.clone(), options)
    }

    /// Lazily iterate values, in key listing order.
    #[must_use]
    pub fn values(&self, options: IterOptions) -> ValueIterator {
        ValueIterator::new(self.clone(), options)
    }
}
