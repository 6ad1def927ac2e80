//! HTTP server error types.

/// Server error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ServerErrorKind {
    /// Listener could not be bound
    #[display("Failed to bind {}: {}", addr, reason)]
    Bind {
        /// Address the server tried to bind
        addr: String,
        /// Underlying error message
        reason: String,
    },
    /// Malformed request payload
    #[display("Invalid request: {}", _0)]
    InvalidRequest(String),
    /// Server failed while running
    #[display("Server error: {}", _0)]
    Runtime(String),
}

/// Server error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Server Error: {} at line {} in {}", kind, line, file)]
pub struct ServerError {
    /// The kind of error that occurred
    pub kind: ServerErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ServerError {
    /// Create a new server error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ServerErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
