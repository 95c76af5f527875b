//! Filesystem object store
//!
//! Directory-rooted implementation of the storage traits: uploaded files are
//! read from the input root by their full reference path, output objects are
//! written flat into the output root under their object key. The filesystem
//! keeps no content-type metadata, so types are inferred from file
//! extensions on read.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::adapters::storage::traits::{ByteSink, ByteSource};
use crate::domain::document::{infer_content_type, StoredObject};
use crate::domain::errors::StorageError;
use crate::domain::ids::FileRef;
use crate::domain::Result;

/// Filesystem-backed object store
pub struct FsObjectStore {
    input_root: PathBuf,
    output_root: PathBuf,
}

impl FsObjectStore {
    /// Create a store reading uploads from `input_root` and writing output
    /// into `output_root`
    pub fn new(input_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            input_root: input_root.into(),
            output_root: output_root.into(),
        }
    }

    fn unavailable(path: &Path, err: std::io::Error) -> StorageError {
        StorageError::Unavailable(format!("{}: {err}", path.display()))
    }
}

#[async_trait]
impl ByteSource for FsObjectStore {
    async fn fetch(&self, file_ref: &FileRef) -> Result<StoredObject> {
        let path = self.input_root.join(file_ref.as_str());
        let bytes = tokio::fs::read(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => StorageError::NotFound(file_ref.to_string()),
            _ => Self::unavailable(&path, e),
        })?;
        let content_type = infer_content_type(file_ref.object_key());

        debug!(
            file_ref = %file_ref,
            content_type,
            bytes = bytes.len(),
            "Fetched object from filesystem"
        );
        Ok(StoredObject::new(bytes, content_type))
    }
}

#[async_trait]
impl ByteSink for FsObjectStore {
    async fn store(&self, key: &str, bytes: &[u8], _content_type: &str) -> Result<()> {
        tokio::fs::create_dir_all(&self.output_root)
            .await
            .map_err(|e| Self::unavailable(&self.output_root, e))?;

        let path = self.output_root.join(key);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| Self::unavailable(&path, e))?;

        debug!(key, bytes = bytes.len(), "Stored output object");
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let path = self.output_root.join(key);
        let exists = tokio::fs::try_exists(&path)
            .await
            .map_err(|e| Self::unavailable(&path, e))?;
        Ok(exists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::VeilError;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> FsObjectStore {
        FsObjectStore::new(dir.path().join("in"), dir.path().join("out"))
    }

    #[tokio::test]
    async fn test_fetch_reads_bytes_and_infers_content_type() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        std::fs::create_dir_all(dir.path().join("in/incoming")).unwrap();
        std::fs::write(dir.path().join("in/incoming/people.csv"), b"name\nAnn\n").unwrap();

        let file_ref = FileRef::new("incoming/people.csv").unwrap();
        let object = store.fetch(&file_ref).await.unwrap();
        assert_eq!(object.bytes, b"name\nAnn\n");
        assert_eq!(object.content_type, "text/csv");
    }

    #[tokio::test]
    async fn test_fetch_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        let file_ref = FileRef::new("incoming/missing.json").unwrap();
        let err = store.fetch(&file_ref).await.unwrap_err();
        assert!(matches!(
            err,
            VeilError::Storage(StorageError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_store_creates_output_root_and_writes() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        store
            .store("people.json", b"[]", "application/json")
            .await
            .unwrap();
        let written = std::fs::read(dir.path().join("out/people.json")).unwrap();
        assert_eq!(written, b"[]");
    }

    #[tokio::test]
    async fn test_exists_reflects_stored_objects() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        assert!(!store.exists("people.json").await.unwrap());
        store
            .store("people.json", b"[]", "application/json")
            .await
            .unwrap();
        assert!(store.exists("people.json").await.unwrap());
    }
}
