//! String key-value stores.

pub mod file;
pub mod in_memory;
pub mod r#trait;

pub use file::FileKeyValueStore;
pub use in_memory::InMemoryKeyValueStore;
pub use r#trait::{KeyValueStore, StoreError};
