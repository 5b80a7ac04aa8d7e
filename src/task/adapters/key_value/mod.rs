//! Repository adapter over a key-value store.

mod repository;

pub use repository::KeyValueTaskRepository;
