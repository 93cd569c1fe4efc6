//! In-memory [`StorageBridge`] implementation.
//!
//! [`MemoryBridge`] keeps entries in a [`BTreeMap`], so `list_keys` pages
//! over a stable, sorted key order. It enforces the listing page ceiling the
//! way the real service does and counts calls per primitive, which lets
//! tests assert that an operation issued no (or exactly N) remote calls.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::bail;
use async_trait::async_trait;
use parking_lot::Mutex;

use crate::bridge::{BridgeRecord, StorageBridge, LIST_PAGE_CEILING};

/// In-memory `StorageBridge` for tests and ephemeral data.
///
/// All operations complete immediately and never fail, except for a
/// `list_keys` call whose `count` exceeds the page ceiling, which is
/// rejected exactly as the real service rejects it.
pub struct MemoryBridge {
    entries: Mutex<BTreeMap<String, String>>,
    page_ceiling: usize,
    set_calls: AtomicU64,
    get_calls: AtomicU64,
    list_calls: AtomicU64,
}

impl MemoryBridge {
    /// Creates an empty bridge with the production page ceiling.
    #[must_use]
    pub fn new() -> Self {
        Self::with_page_ceiling(LIST_PAGE_CEILING)
    }

    /// Creates an empty bridge that rejects listing counts above `page_ceiling`.
    #[must_use]
    pub fn with_page_ceiling(page_ceiling: usize) -> Self {
        Self {
            entries: Mutex::new(BTreeMap::new()),
            page_ceiling,
            set_calls: AtomicU64::new(0),
            get_calls: AtomicU64::new(0),
            list_calls: AtomicU64::new(0),
        }
    }

    /// Creates a bridge preloaded with the given entries.
    #[must_use]
    pub fn with_entries<K, V, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let bridge = Self::new();
        {
            let mut map = bridge.entries.lock();
            for (key, value) in entries {
                map.insert(key.into(), value.into());
            }
        }
        bridge
    }

    /// Removes an entry out-of-band, as another writer racing this client
    /// would. The service itself offers no delete primitive.
    pub fn remove(&self, key: &str) -> Option<String> {
        self.entries.lock().remove(key)
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether the bridge holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Number of `set` calls observed so far.
    #[must_use]
    pub fn set_calls(&self) -> u64 {
        self.set_calls.load(Ordering::Relaxed)
    }

    /// Number of `get` calls observed so far.
    #[must_use]
    pub fn get_calls(&self) -> u64 {
        self.get_calls.load(Ordering::Relaxed)
    }

    /// Number of `list_keys` calls observed so far.
    #[must_use]
    pub fn list_calls(&self) -> u64 {
        self.list_calls.load(Ordering::Relaxed)
    }
}

impl Default for MemoryBridge {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageBridge for MemoryBridge {
    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.set_calls.fetch_add(1, Ordering::Relaxed);
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get(&self, keys: &[String]) -> anyhow::Result<Vec<BridgeRecord>> {
        self.get_calls.fetch_add(1, Ordering::Relaxed);
        let entries = self.entries.lock();
        Ok(keys
            .iter()
            .filter_map(|key| {
                entries.get(key).map(|value| BridgeRecord {
                    key: key.clone(),
                    value: value.clone(),
                })
            })
            .collect())
    }

    async fn list_keys(&self, offset: usize, count: usize) -> anyhow::Result<Vec<String>> {
        self.list_calls.fetch_add(1, Ordering::Relaxed);
        if count > self.page_ceiling {
            bail!(
                "listing count {count} exceeds the page ceiling {}",
                self.page_ceiling
            );
        }
        Ok(self
            .entries
            .lock()
            .keys()
            .skip(offset)
            .take(count)
            .cloned()
            .collect())
    }
}
