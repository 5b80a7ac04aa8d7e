//! Adapter implementations for task storage.
//!
//! - [`memory`]: in-process key-value store
//! - [`file`]: directory-backed key-value store
//! - [`key_value`]: task repository over any key-value store

pub mod file;
pub mod key_value;
pub mod memory;
