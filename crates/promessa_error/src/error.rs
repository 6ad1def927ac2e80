//! Top-level error wrapper types.

use crate::{AuthError, ConfigError, PlannerError, SeatingError, ServerError, StorageError};

#[cfg(feature = "database")]
use crate::DatabaseError;

/// Foundation error enum composing the per-domain errors of the workspace.
///
/// # Examples
///
/// ```
/// use promessa_error::{PromessaError, ConfigError};
///
/// let config_err = ConfigError::new("missing bind address");
/// let err: PromessaError = config_err.into();
/// assert!(format!("{}", err).contains("Config Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PromessaErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Remote store (database) error
    #[cfg(feature = "database")]
    #[from(DatabaseError)]
    Database(DatabaseError),
    /// Device-local fallback store error
    #[from(StorageError)]
    Storage(StorageError),
    /// Seating-chart error
    #[from(SeatingError)]
    Seating(SeatingError),
    /// Planner (guests, checklist, budget, vendors) error
    #[from(PlannerError)]
    Planner(PlannerError),
    /// Identity/session error
    #[from(AuthError)]
    Auth(AuthError),
    /// HTTP server error
    #[from(ServerError)]
    Server(ServerError),
}

/// Promessa error with kind discrimination.
///
/// The kind is boxed so `Result<T, PromessaError>` stays a single word wide
/// on the happy path.
///
/// # Examples
///
/// ```
/// use promessa_error::{PromessaResult, ConfigError};
///
/// fn might_fail() -> PromessaResult<()> {
///     Err(ConfigError::new("missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Promessa Error: {}", _0)]
pub struct PromessaError(Box<PromessaErrorKind>);

impl PromessaError {
    /// Create a new error from a kind.
    pub fn new(kind: PromessaErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Access the underlying error kind.
    pub fn kind(&self) -> &PromessaErrorKind {
        &self.0
    }
}

impl<T> From<T> for PromessaError
where
    T: Into<PromessaErrorKind>,
{
    fn from(value: T) -> Self {
        Self::new(value.into())
    }
}

/// Convenience alias used across the workspace.
pub type PromessaResult<T> = Result<T, PromessaError>;
