//! Identity and session error types.

/// Identity error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum AuthErrorKind {
    /// No credentials were supplied with the request
    #[display("Missing credentials")]
    MissingCredentials,
    /// The supplied token or password was rejected
    #[display("Invalid credentials")]
    InvalidCredentials,
    /// The session has expired
    #[display("Session expired")]
    SessionExpired,
    /// The identity provider does not support this operation
    #[display("Operation not supported by the identity provider: {}", _0)]
    Unsupported(String),
    /// The identity provider call itself failed
    #[display("Identity provider error: {}", _0)]
    Provider(String),
}

/// Identity error with source location tracking.
///
/// # Examples
///
/// ```
/// use promessa_error::{AuthError, AuthErrorKind};
///
/// let err = AuthError::new(AuthErrorKind::MissingCredentials);
/// assert!(format!("{}", err).contains("Missing credentials"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Auth Error: {} at line {} in {}", kind, line, file)]
pub struct AuthError {
    /// The kind of error that occurred
    pub kind: AuthErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl AuthError {
    /// Create a new auth error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AuthErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
