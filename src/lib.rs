//! Taskboard: local task tracking core.
//!
//! This crate lets users create, edit, filter, and complete short text
//! tasks persisted in a local key-value store.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task model with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Concrete storage implementations (memory, files)
//!
//! # Modules
//!
//! - [`task`]: Task model, storage, validation, and service
//! - [`config`]: Application configuration
//! - [`logging`]: Diagnostic output setup

pub mod config;
pub mod logging;
pub mod task;
