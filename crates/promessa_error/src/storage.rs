//! Device-local fallback store error types.

/// Kinds of local storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Failed to create storage directory
    #[display("Failed to create storage directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write entry
    #[display("Failed to write entry: {}", _0)]
    FileWrite(String),
    /// Failed to read entry
    #[display("Failed to read entry: {}", _0)]
    FileRead(String),
    /// Failed to delete entry
    #[display("Failed to delete entry: {}", _0)]
    FileDelete(String),
    /// Entry payload could not be serialized or deserialized
    #[display("Invalid entry payload: {}", _0)]
    InvalidPayload(String),
    /// Invalid storage path
    #[display("Invalid storage path: {}", _0)]
    InvalidPath(String),
}

/// Local storage error with location tracking.
///
/// # Examples
///
/// ```
/// use promessa_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::FileRead("seating.json".to_string()));
/// assert!(format!("{}", err).contains("seating.json"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
