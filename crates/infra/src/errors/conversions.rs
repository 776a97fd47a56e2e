//! Conversions from external infrastructure errors into domain errors.

use profilegate_domain::ProfileError;
use rusqlite::Error as SqlError;
use tokio::task::JoinError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ProfileError);

impl From<InfraError> for ProfileError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ProfileError> for InfraError {
    fn from(value: ProfileError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoProfileError {
    fn into_profile_error(self) -> ProfileError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → ProfileError */
/* -------------------------------------------------------------------------- */

impl IntoProfileError for SqlError {
    fn into_profile_error(self) -> ProfileError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match err.code {
                    ErrorCode::DatabaseBusy => ProfileError::Persistence("database is busy".into()),
                    ErrorCode::DatabaseLocked => {
                        ProfileError::Persistence("database is locked".into())
                    }
                    ErrorCode::ConstraintViolation => {
                        ProfileError::Persistence(format!("constraint violation: {message}"))
                    }
                    _ => ProfileError::Persistence(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::FromSqlConversionFailure(_, _, cause) => {
                ProfileError::Persistence(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                ProfileError::Persistence(format!("invalid column type: {ty}"))
            }
            RE::InvalidPath(path) => ProfileError::Config(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            other => ProfileError::Persistence(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_profile_error())
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → ProfileError */
/* -------------------------------------------------------------------------- */

impl From<r2d2::Error> for InfraError {
    fn from(value: r2d2::Error) -> Self {
        InfraError(ProfileError::Persistence(format!("connection pool: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* tokio::task::JoinError → ProfileError */
/* -------------------------------------------------------------------------- */

impl From<JoinError> for InfraError {
    fn from(value: JoinError) -> Self {
        InfraError(ProfileError::Internal(format!("task join error: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
