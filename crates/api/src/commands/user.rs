//! Identity view and update handlers
//!
//! Both routes resolve the acting identity from the authenticated context and
//! the target from the `id` query parameter, then hand off to
//! `ProfileUpdateService`.

use std::sync::Arc;
use std::time::Instant;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::Json;
use profilegate_domain::{Identity, ProfileAction, ProfilePatch};
use serde::Deserialize;
use tracing::info;

use crate::context::AppContext;
use crate::error::ApiError;
use crate::middleware::auth::AuthenticatedIdentity;
use crate::utils::logging::log_command_execution;

/// Query string of the `/user` routes
#[derive(Debug, Deserialize)]
pub struct TargetQuery {
    pub id: Option<String>,
}

// =============================================================================
// Command 1: get_user
// =============================================================================

/// `GET /user?id=N`
///
/// Reads the target identity. A non-admin target gets its viewed timestamp
/// refreshed and saved.
pub async fn get_user(
    State(ctx): State<Arc<AppContext>>,
    acting: AuthenticatedIdentity,
    Query(query): Query<TargetQuery>,
) -> Result<Json<Identity>, ApiError> {
    let target_id = parse_target_id(query.id.as_deref())?;
    execute(&ctx, "user::get_user", acting.id(), target_id, ProfileAction::View).await
}

// =============================================================================
// Command 2: update_user
// =============================================================================

/// `POST /user?id=N`
///
/// Applies a JSON `{name?, phone?}` patch to the target identity. An empty
/// body is an empty patch.
pub async fn update_user(
    State(ctx): State<Arc<AppContext>>,
    acting: AuthenticatedIdentity,
    Query(query): Query<TargetQuery>,
    body: Bytes,
) -> Result<Json<Identity>, ApiError> {
    let target_id = parse_target_id(query.id.as_deref())?;
    let patch = parse_patch(&body)?;
    execute(&ctx, "user::update_user", acting.id(), target_id, ProfileAction::Update(patch)).await
}

async fn execute(
    ctx: &AppContext,
    command: &str,
    acting_id: i64,
    target_id: i64,
    action: ProfileAction,
) -> Result<Json<Identity>, ApiError> {
    let start = Instant::now();
    info!(command, acting_id, target_id, "executing command");

    let result = ctx
        .service
        .process_request(acting_id, target_id, action)
        .await
        .map(Json)
        .map_err(ApiError::from);

    log_command_execution(command, start.elapsed(), result.as_ref().err().map(ApiError::label));
    result
}

fn parse_target_id(raw: Option<&str>) -> Result<i64, ApiError> {
    let raw = raw.ok_or_else(|| ApiError::BadRequest("missing id parameter".into()))?;
    raw.parse::<i64>().map_err(|_| ApiError::BadRequest(format!("invalid id parameter: {raw:?}")))
}

fn parse_patch(body: &[u8]) -> Result<ProfilePatch, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ProfilePatch::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("malformed request body: {e}")))
}
