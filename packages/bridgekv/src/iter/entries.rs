//! Entry iterator: key+value pairs composed from a key iterator plus point
//! lookups.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::iter::{Entry, IterOptions, KeyIterator, StoreIterator};
use crate::store::BridgeStore;

/// Iterator over `(key, value)` pairs.
///
/// All positional and pagination logic lives in the inner [`KeyIterator`];
/// this layer only resolves values, through the same get paths used for
/// direct lookups, so not-found semantics are identical between direct gets
/// and iteration.
pub struct EntryIterator {
    store: BridgeStore,
    inner: KeyIterator,
}

impl EntryIterator {
    pub(crate) fn new(store: BridgeStore, options: IterOptions) -> Self {
        let inner = store.keys(options);
        Self { store, inner }
    }
}

#[async_trait]
impl StoreIterator for EntryIterator {
    type Item = Entry;

    /// A key that vanished between listing and lookup ends this call
    /// without retrying or looking ahead: the yielded prefix is a
    /// last-known-good snapshot, not a guaranteed count.
    async fn next(&mut self) -> Result<Option<Entry>, StoreError> {
        let Some(key) = self.inner.next().await? else {
            return Ok(None);
        };
        match self.store.get(&key).await {
            Ok(value) => Ok(Some((key, value))),
            Err(StoreError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Values for the whole batch are resolved with a single multi-get;
    /// pairs keep key order, and a key whose value is missing is dropped
    /// from the batch rather than padded.
    async fn nextv(&mut self, size: usize) -> Result<Vec<Entry>, StoreError> {
        let keys = self.inner.nextv(size).await?;
        if keys.is_empty() {
            return Ok(Vec::new());
        }
        let values = self.store.get_many(&keys).await?;
        Ok(keys
            .into_iter()
            .zip(values)
            .filter_map(|(key, value)| value.map(|value| (key, value)))
            .collect())
    }

    fn seek(&mut self, target: &str) {
        self.inner.seek(target);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::bridges::MemoryBridge;

    fn seeded() -> (Arc<MemoryBridge>, BridgeStore) {
        let bridge = Arc::new(MemoryBridge::with_entries([
            ("somekey0", "somevalue0"),
            ("somekey1", "somevalue1"),
        ]));
        let store = BridgeStore::new(bridge.clone());
        (bridge, store)
    }

    fn pair(key: &str, value: &str) -> Entry {
        (key.to_string(), value.to_string())
    }

    #[tokio::test]
    async fn all_returns_every_pair_in_order() {
        let (_bridge, store) = seeded();
        let mut iter = store.entries(IterOptions::default());

        assert_eq!(
            iter.all().await.unwrap(),
            vec![
                pair("somekey0", "somevalue0"),
                pair("somekey1", "somevalue1"),
            ]
        );
    }

    #[tokio::test]
    async fn next_steps_through_the_pairs() {
        let (_bridge, store) = seeded();
        let mut iter = store.entries(IterOptions::default());

        assert_eq!(
            iter.next().await.unwrap(),
            Some(pair("somekey0", "somevalue0"))
        );
        assert_eq!(
            iter.next().await.unwrap(),
            Some(pair("somekey1", "somevalue1"))
        );
        assert_eq!(iter.next().await.unwrap(), None);
    }

    #[tokio::test]
    async fn nextv_matches_sequential_next() {
        let (_bridge, store) = seeded();
        let mut batched = store.entries(IterOptions::default());
        let mut stepped = store.entries(IterOptions::default());

        let batch = batched.nextv(2).await.unwrap();
        let first = stepped.next().await.unwrap().unwrap();
        let second = stepped.next().await.unwrap().unwrap();
        assert_eq!(batch, vec![first, second]);
    }

    #[tokio::test]
    async fn nextv_resolves_the_batch_with_one_multi_get() {
        let (bridge, store) = seeded();
        let mut iter = store.entries(IterOptions::default());

        iter.nextv(2).await.unwrap();
        assert_eq!(bridge.get_calls(), 1);
    }

    #[tokio::test]
    async fn seek_rewinds_the_inner_iterator() {
        let (_bridge, store) = seeded();
        let mut iter = store.entries(IterOptions::default());

        iter.next().await.unwrap();
        iter.seek("somekey0");
        assert_eq!(
            iter.next().await.unwrap(),
            Some(pair("somekey0", "somevalue0"))
        );
    }

    #[tokio::test]
    async fn vanished_key_ends_a_single_step_call() {
        let (bridge, store) = seeded();
        let mut iter = store.entries(IterOptions::default());

        iter.next().await.unwrap();
        // The listing cached somekey1, but its value is gone by lookup time.
        bridge.remove("somekey1");
        assert_eq!(iter.next().await.unwrap(), None);
    }

    #[tokio::test]
    async fn nextv_drops_a_vanished_key_without_padding() {
        let (bridge, store) = seeded();
        let mut iter = store.entries(IterOptions::default());

        bridge.remove("somekey1");
        assert_eq!(
            iter.nextv(2).await.unwrap(),
            vec![pair("somekey0", "somevalue0")]
        );
    }

    #[tokio::test]
    async fn exhausted_iterator_skips_value_resolution() {
        let (bridge, store) = seeded();
        let mut iter = store.entries(IterOptions::default());

        iter.all().await.unwrap();
        let get_calls = bridge.get_calls();

        assert!(iter.nextv(2).await.unwrap().is_empty());
        assert_eq!(bridge.get_calls(), get_calls);
    }
}
