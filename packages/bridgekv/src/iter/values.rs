//! Value iterator: the value half of the entry stream.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::iter::{EntryIterator, IterOptions, StoreIterator};
use crate::store::BridgeStore;

/// Iterator over values only, in key listing order.
///
/// A thin projection of [`EntryIterator`]; seek targets are still keys.
pub struct ValueIterator {
    inner: EntryIterator,
}

impl ValueIterator {
    pub(crate) fn new(store: BridgeStore, options: IterOptions) -> Self {
        Self {
            inner: EntryIterator::new(store, options),
        }
    }
}

#[async_trait]
impl StoreIterator for ValueIterator {
    type Item = String;

    async fn next(&mut self) -> Result<Option<String>, StoreError> {
        Ok(self.inner.next().await?.map(|(_, value)| value))
    }

    async fn nextv(&mut self, size: usize) -> Result<Vec<String>, StoreError> {
        Ok(self
            .inner
            .nextv(size)
            .await?
            .into_iter()
            .map(|(_, value)| value)
            .collect())
    }

    fn seek(&mut self, target: &str) {
        self.inner.seek(target);
    }
}
