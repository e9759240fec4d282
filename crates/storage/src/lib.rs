//! Durable key-value storage boundary.
//!
//! The cart only needs "get a string by key" and "set a string by key". This
//! crate defines that capability and ships two implementations: an in-memory
//! fake for tests and a JSON-file store for real use.

pub mod kv;

pub use kv::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore, StoreError};
