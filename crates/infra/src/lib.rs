//! # ProfileGate Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Identity repositories (SQLite, in-memory)
//! - Configuration loading from environment and files
//! - Tracing subscriber bootstrap
//!
//! ## Architecture
//! - Implements traits defined in `profilegate-core`
//! - Contains all "impure" code (I/O, global subscriber state)

pub mod config;
pub mod database;
pub mod errors;
pub mod observability;

// Re-export commonly used items
pub use database::*;
pub use errors::InfraError;
pub use observability::init_tracing;
