//! Device-local fallback storage for Promessa.
//!
//! Before the remote store is confirmed to hold data for a user, the client
//! may have state saved locally (the pre-backend era persisted seating charts
//! on the device). This crate provides that key-value fallback store:
//! string payloads namespaced by entity kind and user id, read at startup and
//! cleared after a successful migration.
//!
//! # Example
//!
//! ```rust
//! use promessa_storage::{FileSystemStore, LocalStore};
//! use uuid::Uuid;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = FileSystemStore::new("/tmp/promessa-local")?;
//! let user = Uuid::new_v4();
//!
//! store.write(user, "seating", "[]").await?;
//! assert_eq!(store.read(user, "seating").await?.as_deref(), Some("[]"));
//! store.delete(user, "seating").await?;
//! assert!(store.read(user, "seating").await?.is_none());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use promessa_error::PromessaResult;
use uuid::Uuid;

mod filesystem;

pub use filesystem::FileSystemStore;
pub use promessa_error::{StorageError, StorageErrorKind};

/// Trait for the device-local fallback store.
///
/// Entries are serialized strings keyed by owning user and entity kind
/// (e.g. `"seating"`). Implementations persist them however suits the device.
#[async_trait::async_trait]
pub trait LocalStore: Send + Sync {
    /// Read the entry for a user and kind, `None` when absent.
    async fn read(&self, user_id: Uuid, kind: &str) -> PromessaResult<Option<String>>;

    /// Write (or replace) the entry for a user and kind.
    async fn write(&self, user_id: Uuid, kind: &str, payload: &str) -> PromessaResult<()>;

    /// Delete the entry for a user and kind. A no-op when absent.
    async fn delete(&self, user_id: Uuid, kind: &str) -> PromessaResult<()>;
}
