//! Error taxonomy for store and iterator operations.

/// Errors surfaced by [`BridgeStore`](crate::store::BridgeStore) operations
/// and the iterator variants.
///
/// No operation retries internally; every error is raised once, to the
/// immediate caller of the operation that triggered it.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Key exceeds the write-time size limit. Raised before any remote call.
    #[error("key size {size} exceeds the {limit}-byte limit")]
    InvalidKey { size: usize, limit: usize },

    /// Value exceeds the write-time size limit. Raised before any remote call.
    #[error("value size {size} exceeds the {limit}-byte limit")]
    InvalidValue { size: usize, limit: usize },

    /// Single-key get found no match. Never raised by multi-key lookups.
    #[error("key {0} was not found")]
    NotFound(String),

    /// Configured iterator limit exceeds the listing page ceiling. Raised in
    /// place of any pagination attempt.
    #[error("iterator limit {requested} exceeds the listing page ceiling {ceiling}")]
    InvalidLimit { requested: usize, ceiling: usize },

    /// Any failure from the remote service, carrying the raw detail.
    #[error("remote storage failure: {0}")]
    Remote(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_sizes() {
        let err = StoreError::InvalidKey {
            size: 101,
            limit: 100,
        };
        assert_eq!(err.to_string(), "key size 101 exceeds the 100-byte limit");

        let err = StoreError::InvalidValue {
            size: 4097,
            limit: 4096,
        };
        assert_eq!(
            err.to_string(),
            "value size 4097 exceeds the 4096-byte limit"
        );
    }

    #[test]
    fn not_found_names_the_key() {
        let err = StoreError::NotFound("somekey0".to_string());
        assert_eq!(err.to_string(), "key somekey0 was not found");
    }

    #[test]
    fn remote_error_preserves_the_detail() {
        let err = StoreError::from(anyhow::anyhow!("connection reset"));
        assert_eq!(err.to_string(), "remote storage failure: connection reset");
    }
}
