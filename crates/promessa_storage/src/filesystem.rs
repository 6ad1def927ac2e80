//! Filesystem-backed local store implementation.

use crate::LocalStore;
use promessa_error::{PromessaResult, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Filesystem store keeping one JSON file per user and entity kind:
/// `{base_path}/{user_id}/{kind}.json`.
///
/// Writes go through a temp file followed by a rename so a crashed write
/// never leaves a half-written entry behind.
pub struct FileSystemStore {
    base_path: PathBuf,
}

impl FileSystemStore {
    /// Create a new filesystem store, creating the base directory if needed.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created or accessed.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> PromessaResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::info!(path = %base_path.display(), "Created local fallback store");
        Ok(Self { base_path })
    }

    /// Path of the entry for a user and kind.
    fn entry_path(&self, user_id: Uuid, kind: &str) -> PromessaResult<PathBuf> {
        // Kinds are fixed identifiers, not user input, but a path separator
        // here would escape the namespace.
        if kind.is_empty() || kind.contains(std::path::MAIN_SEPARATOR) || kind.contains('.') {
            return Err(StorageError::new(StorageErrorKind::InvalidPath(kind.to_string())).into());
        }
        Ok(self
            .base_path
            .join(user_id.to_string())
            .join(format!("{kind}.json")))
    }

    fn write_atomic(path: &Path, payload: &str) -> PromessaResult<()> {
        let parent = path.parent().ok_or_else(|| {
            StorageError::new(StorageErrorKind::InvalidPath(path.display().to_string()))
        })?;
        std::fs::create_dir_all(parent).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                parent.display(),
                e
            )))
        })?;

        let tmp = path.with_extension(format!("tmp-{}", Uuid::new_v4()));
        std::fs::write(&tmp, payload).map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                tmp.display(),
                e
            )))
        })?;
        std::fs::rename(&tmp, path).map_err(|e| {
            let _ = std::fs::remove_file(&tmp);
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl LocalStore for FileSystemStore {
    #[tracing::instrument(skip(self))]
    async fn read(&self, user_id: Uuid, kind: &str) -> PromessaResult<Option<String>> {
        let path = self.entry_path(user_id, kind)?;
        match std::fs::read_to_string(&path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into()),
        }
    }

    #[tracing::instrument(skip(self, payload), fields(bytes = payload.len()))]
    async fn write(&self, user_id: Uuid, kind: &str, payload: &str) -> PromessaResult<()> {
        let path = self.entry_path(user_id, kind)?;
        Self::write_atomic(&path, payload)?;
        tracing::debug!(path = %path.display(), "Wrote local entry");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, user_id: Uuid, kind: &str) -> PromessaResult<()> {
        let path = self.entry_path(user_id, kind)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::new(StorageErrorKind::FileDelete(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_store() -> (FileSystemStore, PathBuf) {
        let dir = std::env::temp_dir().join(format!("promessa-storage-{}", Uuid::new_v4()));
        let store = FileSystemStore::new(&dir).unwrap();
        (store, dir)
    }

    #[tokio::test]
    async fn round_trips_an_entry() {
        let (store, dir) = scratch_store();
        let user = Uuid::new_v4();

        assert!(store.read(user, "seating").await.unwrap().is_none());
        store.write(user, "seating", "{\"tables\":[]}").await.unwrap();
        assert_eq!(
            store.read(user, "seating").await.unwrap().as_deref(),
            Some("{\"tables\":[]}")
        );

        store.delete(user, "seating").await.unwrap();
        assert!(store.read(user, "seating").await.unwrap().is_none());

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[tokio::test]
    async fn delete_of_missing_entry_is_a_noop() {
        let (store, dir) = scratch_store();
        store.delete(Uuid::new_v4(), "seating").await.unwrap();
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[tokio::test]
    async fn entries_are_namespaced_per_user() {
        let (store, dir) = scratch_store();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        store.write(first, "seating", "first").await.unwrap();
        store.write(second, "seating", "second").await.unwrap();

        assert_eq!(
            store.read(first, "seating").await.unwrap().as_deref(),
            Some("first")
        );
        assert_eq!(
            store.read(second, "seating").await.unwrap().as_deref(),
            Some("second")
        );

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[tokio::test]
    async fn rejects_kinds_that_escape_the_namespace() {
        let (store, dir) = scratch_store();
        assert!(store.read(Uuid::new_v4(), "a/b").await.is_err());
        std::fs::remove_dir_all(dir).unwrap();
    }
}
