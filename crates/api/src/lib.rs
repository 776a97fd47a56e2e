//! # ProfileGate API
//!
//! HTTP application layer - routes, extractors and the main entry point.
//!
//! This crate contains:
//! - Request handlers (HTTP → use case bridge)
//! - Application context (dependency injection)
//! - Authentication middleware for the acting identity
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Maps domain outcomes to HTTP statuses in one place (`error`)

pub mod commands;
pub mod context;
pub mod error;
pub mod middleware;
pub mod utils;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

pub use context::AppContext;
pub use error::ApiError;
pub use middleware::auth::{AuthenticatedIdentity, IDENTITY_HEADER};

/// Build the application router.
///
/// The trusted-header middleware runs on every route; only handlers that
/// extract `AuthenticatedIdentity` require it.
pub fn router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/user", get(commands::user::get_user).post(commands::user::update_user))
        .route("/health", get(commands::health::get_health))
        .layer(axum::middleware::from_fn(middleware::auth::trusted_header_auth))
        .with_state(ctx)
}
