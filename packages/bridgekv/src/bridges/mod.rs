//! `StorageBridge` implementations.
//!
//! Provides concrete backends for the [`StorageBridge`](crate::bridge::StorageBridge)
//! trait. Currently includes [`MemoryBridge`] for tests and ephemeral data.

mod memory;

pub use memory::MemoryBridge;
