use std::time::Duration;

use tracing::{info, warn};

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"user::update_user"`).
/// * `elapsed` - Duration the command execution took.
/// * `error_type` - Stable error label on failure, `None` on success.
///
/// Callers must avoid forwarding sensitive values in `command`; payload
/// values never reach this helper.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, error_type: Option<&str>) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    match error_type {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(error_type) => warn!(command, duration_ms, error_type, "command_execution_failure"),
    }
}
