//! Iteration over a paginated remote key listing.
//!
//! The subsystem is built by delegation: [`KeyIterator`] owns all the
//! pagination, caching, and cursor logic; [`EntryIterator`] layers value
//! lookups on top of it; [`ValueIterator`] projects the entry stream down to
//! values. All three expose the same capability interface,
//! [`StoreIterator`].

mod entries;
mod keys;
mod values;

pub use entries::EntryIterator;
pub use keys::KeyIterator;
pub use values::ValueIterator;

use async_trait::async_trait;

use crate::error::StoreError;

/// An ordered `(key, value)` pair.
pub type Entry = (String, String);

/// Batch size used by [`StoreIterator::all`] while draining.
const DRAIN_CHUNK: usize = 1000;

/// Construction options shared by all iterator variants.
#[derive(Debug, Clone, Default)]
pub struct IterOptions {
    /// Maximum number of items the iterator will yield in total, also used
    /// as the listing page size. Must not exceed the store's page ceiling;
    /// unset means unbounded, paging at the ceiling.
    pub limit: Option<usize>,
    /// Initial seek target, applied with the same cached-window rule as
    /// [`StoreIterator::seek`]. On a fresh iterator nothing is cached yet,
    /// so this takes effect only for targets a caller has already loaded —
    /// a known limitation of the forward-only cache, kept as-is.
    pub seek: Option<String>,
}

/// Capability interface implemented by every iterator variant.
///
/// Advancement borrows the iterator mutably, so two `next`/`nextv` calls can
/// never overlap on one instance; drive each iterator sequentially. Dropping
/// an iterator releases everything — there is no close handshake.
#[async_trait]
pub trait StoreIterator: Send {
    type Item: Send;

    /// Yield the next item, or `None` once exhausted.
    async fn next(&mut self) -> Result<Option<Self::Item>, StoreError>;

    /// Yield up to `size` items in order.
    ///
    /// Returns fewer than `size` items only at end-of-stream (or when a
    /// yield limit is hit); an empty batch means the iterator is done.
    async fn nextv(&mut self, size: usize) -> Result<Vec<Self::Item>, StoreError>;

    /// Move the cursor to `target`'s position if `target` is among the keys
    /// cached so far; otherwise do nothing.
    ///
    /// Seeking past the currently loaded window is not supported: the cache
    /// only grows forward from offset zero, and an uncached target is
    /// silently ignored rather than triggering extra fetches.
    fn seek(&mut self, target: &str);

    /// Drain the remainder of the iterator into a single vector.
    async fn all(&mut self) -> Result<Vec<Self::Item>, StoreError> {
        let mut items = Vec::new();
        loop {
            let batch = self.nextv(DRAIN_CHUNK).await?;
            if batch.is_empty() {
                return Ok(items);
            }
            items.extend(batch);
        }
    }
}
