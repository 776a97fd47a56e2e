//! # ProfileGate Domain
//!
//! Business domain types and models for ProfileGate.
//!
//! This crate contains:
//! - The `Identity` record and the client-supplied `ProfilePatch`
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Field policy constants
//!
//! ## Architecture
//! - No dependencies on other ProfileGate crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
