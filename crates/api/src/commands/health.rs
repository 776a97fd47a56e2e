//! Liveness endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::context::AppContext;

/// `GET /health`
///
/// Returns `{"status":"ok"}`, or 503 when the backing store does not answer.
pub async fn get_health(State(ctx): State<Arc<AppContext>>) -> (StatusCode, Json<Value>) {
    match ctx.health_check().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ok" }))),
        Err(err) => {
            tracing::error!(error = %err, "health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(json!({ "status": "unavailable" })))
        }
    }
}
