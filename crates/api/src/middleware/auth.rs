//! Acting identity extraction
//!
//! Token verification happens upstream. The gateway in front of this service
//! forwards the verified identity id in `x-authenticated-identity`; the
//! middleware copies it into request extensions and handlers read it back
//! through the `AuthenticatedIdentity` extractor.

use axum::extract::{FromRequestParts, Request};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;

/// Header carrying the verified acting identity id
pub const IDENTITY_HEADER: &str = "x-authenticated-identity";

/// Acting identity id stored in request extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedIdentity(pub i64);

impl AuthenticatedIdentity {
    pub fn id(&self) -> i64 {
        self.0
    }
}

/// Middleware that trusts the gateway-supplied identity header
///
/// A missing or non-numeric header leaves the request unauthenticated; the
/// extractor then rejects it with 401.
pub async fn trusted_header_auth(mut request: Request, next: Next) -> Response {
    let header = request.headers().get(IDENTITY_HEADER).map(|value| value.to_str());

    match header {
        Some(Ok(raw)) => match raw.trim().parse::<i64>() {
            Ok(id) => {
                request.extensions_mut().insert(AuthenticatedIdentity(id));
            }
            Err(_) => tracing::warn!(header = IDENTITY_HEADER, "non-numeric identity header"),
        },
        Some(Err(_)) => tracing::warn!(header = IDENTITY_HEADER, "unreadable identity header"),
        None => {}
    }

    next.run(request).await
}

impl<S> FromRequestParts<S> for AuthenticatedIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<AuthenticatedIdentity>().copied().ok_or(ApiError::Unauthenticated)
    }
}
