//! Store-level configuration and size limits.

use crate::bridge::LIST_PAGE_CEILING;

/// Maximum key size in bytes accepted by writes.
pub const KEY_SIZE_LIMIT: usize = 100;

/// Maximum value size in bytes accepted by writes.
pub const VALUE_SIZE_LIMIT: usize = 4096;

/// Limits applied by a [`BridgeStore`](crate::store::BridgeStore).
///
/// Size limits are enforced at write time only; reads accept whatever the
/// service returns.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Maximum key size in bytes.
    pub key_size_limit: usize,
    /// Maximum value size in bytes.
    pub value_size_limit: usize,
    /// Per-call ceiling of the remote listing primitive. Configurable for
    /// testing; defaults to [`LIST_PAGE_CEILING`] (1000) in production.
    pub list_page_ceiling: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            key_size_limit: KEY_SIZE_LIMIT,
            value_size_limit: VALUE_SIZE_LIMIT,
            list_page_ceiling: LIST_PAGE_CEILING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_service_limits() {
        let config = StoreConfig::default();
        assert_eq!(config.key_size_limit, 100);
        assert_eq!(config.value_size_limit, 4096);
        assert_eq!(config.list_page_ceiling, 1000);
    }
}
