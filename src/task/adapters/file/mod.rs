//! File-system storage adapter.

mod store;

pub use store::FileKeyValueStore;
