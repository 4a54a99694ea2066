//! Turns `sqlx` failures into domain errors.

use domain::DomainError;
use sqlx::error::ErrorKind;

/// Anything that is not a recognised constraint violation.
pub(crate) fn repository_error(err: sqlx::Error) -> DomainError {
    tracing::error!(error = %err, "store operation failed");
    DomainError::RepositoryError(err.to_string())
}

/// Classifies a failed write. Unique violations become `Conflict` with
/// `on_unique`; foreign-key violations become `on_foreign_key`.
pub(crate) fn write_error(
    err: sqlx::Error,
    on_unique: &str,
    on_foreign_key: impl FnOnce() -> DomainError,
) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        match db_err.kind() {
            ErrorKind::UniqueViolation => return DomainError::Conflict(on_unique.to_string()),
            ErrorKind::ForeignKeyViolation => return on_foreign_key(),
            _ => {}
        }
    }
    repository_error(err)
}
