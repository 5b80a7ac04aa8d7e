//! Task tracking for taskboard.
//!
//! Tasks are created, edited, filtered, completed, and deleted through
//! [`services::TaskService`], which validates input before any storage is
//! touched. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Input validation in [`validation`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
