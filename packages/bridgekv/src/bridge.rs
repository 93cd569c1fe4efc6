//! Remote storage service contract.
//!
//! Defines [`StorageBridge`], the narrow API the rest of the crate is built
//! on: point set, exact-name multi-get, and offset/count key listing. The
//! service offers no range scans, no delete, and no transactions; everything
//! richer is composed client-side on top of these three primitives.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Maximum number of keys the remote listing primitive returns per call.
///
/// Listing requests with a larger `count` are rejected by the service, so
/// iterators never issue one.
pub const LIST_PAGE_CEILING: usize = 1000;

/// A key together with its stored value, as returned by [`StorageBridge::get`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeRecord {
    pub key: String,
    pub value: String,
}

/// Narrow remote storage API.
///
/// Implementations: the hosting platform's app-storage service in
/// production, [`MemoryBridge`](crate::bridges::MemoryBridge) for tests and
/// ephemeral data. The bridge is stateless from this crate's point of view
/// and is shared freely across stores and iterators as
/// `Arc<dyn StorageBridge>`; it provides no locking or transaction
/// discipline, and none is layered on top.
///
/// Every method is a suspension point. Failures carry the raw service-side
/// detail and are mapped to a single remote-error kind by the caller.
#[async_trait]
pub trait StorageBridge: Send + Sync {
    /// Write one key. Overwrites any previous value.
    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;

    /// Fetch the named keys by exact name.
    ///
    /// Returns found keys only, in request order; missing keys are omitted
    /// rather than reported as errors.
    async fn get(&self, keys: &[String]) -> anyhow::Result<Vec<BridgeRecord>>;

    /// List up to `count` keys starting at `offset`, in the service's
    /// stable listing order.
    ///
    /// `count` must not exceed [`LIST_PAGE_CEILING`]. An empty result is the
    /// sole signal that no keys remain at `offset`; a short but non-empty
    /// page does not imply exhaustion.
    async fn list_keys(&self, offset: usize, count: usize) -> anyhow::Result<Vec<String>>;
}
