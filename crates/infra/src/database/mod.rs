//! Database implementations

pub mod identity_repository;
pub mod manager;
pub mod memory_repository;
pub mod seed;

pub use identity_repository::*;
pub use manager::*;
pub use memory_repository::*;
pub use seed::load_seed_file;
