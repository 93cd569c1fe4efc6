//! `BridgeKV` — ordered key-value storage over a narrow remote app-storage bridge.

pub mod bridge;
pub mod bridges;
pub mod config;
pub mod error;
pub mod iter;
pub mod store;

pub use bridge::{BridgeRecord, StorageBridge, LIST_PAGE_CEILING};
pub use bridges::MemoryBridge;
pub use config::{StoreConfig, KEY_SIZE_LIMIT, VALUE_SIZE_LIMIT};
pub use error::StoreError;
pub use iter::{Entry, EntryIterator, IterOptions, KeyIterator, StoreIterator, ValueIterator};
pub use store::{BatchOperation, BridgeStore};
