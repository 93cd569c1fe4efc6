//! Key iterator: lazy, cached pagination over the remote listing primitive.
//!
//! [`KeyIterator`] grows an append-only key cache one page at a time and
//! serves all advancement out of that cache. Pages are always fetched at an
//! offset equal to the cache length, so a backward seek re-serves cached
//! keys without refetching overlapping pages. A page of zero keys is the
//! sole end-of-stream signal; a short but non-empty page is not.

use std::sync::Arc;

use async_trait::async_trait;

use crate::bridge::StorageBridge;
use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::iter::{IterOptions, StoreIterator};

/// Lazily paginated iterator over the remote key listing.
///
/// Keys are yielded in remote listing order. The instance exclusively owns
/// its cache, cursor, and end-of-stream flag; it is never shared between
/// callers, and at most one page fetch is in flight at a time because
/// advancement takes `&mut self`.
pub struct KeyIterator {
    bridge: Arc<dyn StorageBridge>,
    limit: Option<usize>,
    page_ceiling: usize,
    keys: Vec<String>,
    index: usize,
    is_end: bool,
    yielded: usize,
}

impl KeyIterator {
    pub(crate) fn new(
        bridge: Arc<dyn StorageBridge>,
        config: &StoreConfig,
        options: IterOptions,
    ) -> Self {
        let mut iter = Self {
            bridge,
            limit: options.limit,
            page_ceiling: config.list_page_ceiling,
            keys: Vec::new(),
            index: 0,
            is_end: false,
            yielded: 0,
        };
        if let Some(target) = options.seek {
            iter.seek(&target);
        }
        iter
    }

    /// Items this iterator may still yield under its configured limit.
    fn remaining_quota(&self) -> usize {
        match self.limit {
            Some(limit) => limit.saturating_sub(self.yielded),
            None => usize::MAX,
        }
    }

    /// Listing page size: the configured limit, or the ceiling when unset.
    fn page_size(&self) -> Result<usize, StoreError> {
        match self.limit {
            Some(requested) if requested > self.page_ceiling => Err(StoreError::InvalidLimit {
                requested,
                ceiling: self.page_ceiling,
            }),
            Some(requested) => Ok(requested),
            None => Ok(self.page_ceiling),
        }
    }

    /// Grow the cache until `wanted` items are available at the cursor or
    /// the listing is exhausted.
    ///
    /// Fetches at the current cache length, never at the cursor, so cached
    /// keys are fetched exactly once per iterator instance.
    async fn fill_cache(&mut self, wanted: usize) -> Result<(), StoreError> {
        while !self.is_end && self.index.saturating_add(wanted) > self.keys.len() {
            let count = self.page_size()?;
            let offset = self.keys.len();
            let page = self
                .bridge
                .list_keys(offset, count)
                .await
                .map_err(StoreError::Remote)?;
            tracing::trace!(offset, count, fetched = page.len(), "fetched listing page");
            if page.is_empty() {
                self.is_end = true;
            } else {
                self.keys.extend(page);
            }
        }
        Ok(())
    }
}

#[async_trait]
impl StoreIterator for KeyIterator {
    type Item = String;

    async fn next(&mut self) -> Result<Option<String>, StoreError> {
        if self.remaining_quota() == 0 {
            return Ok(None);
        }
        self.fill_cache(1).await?;
        let Some(key) = self.keys.get(self.index) else {
            return Ok(None);
        };
        let key = key.clone();
        self.index += 1;
        self.yielded += 1;
        Ok(Some(key))
    }

    async fn nextv(&mut self, size: usize) -> Result<Vec<String>, StoreError> {
        let want = size.min(self.remaining_quota());
        if want == 0 {
            return Ok(Vec::new());
        }
        self.fill_cache(want).await?;
        let end = self.index.saturating_add(want).min(self.keys.len());
        let batch = self.keys[self.index..end].to_vec();
        self.index = end;
        self.yielded += batch.len();
        Ok(batch)
    }

    fn seek(&mut self, target: &str) {
        if let Some(position) = self.keys.iter().position(|key| key == target) {
            self.index = position;
        }
    }
}
