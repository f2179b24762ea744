//! Object storage for uploaded media.
//!
//! Uploads return a [`StoredObject`] carrying both the public URL and a
//! structured [`ObjectKey`]. Deletes are keyed by the stored key; the key is
//! never re-derived by parsing the public URL.

use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use uuid::Uuid;

/// Bucket that holds equipment images.
pub const EQUIPMENT_IMAGE_BUCKET: &str = "imagenes_equipo";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid object key: {0}")]
    InvalidKey(String),
}

/// Structured reference to a stored object: bucket plus object name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectKey {
    pub bucket: String,
    pub name: String,
}

impl ObjectKey {
    pub fn new(bucket: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            name: name.into(),
        }
    }

    /// Parses the persisted `bucket/name` form.
    pub fn parse(raw: &str) -> Result<Self, StorageError> {
        match raw.split_once('/') {
            Some((bucket, name))
                if !bucket.is_empty()
                    && !name.is_empty()
                    && !name.contains('/')
                    && name != ".."
                    && bucket != ".." =>
            {
                Ok(Self::new(bucket, name))
            }
            _ => Err(StorageError::InvalidKey(raw.to_string())),
        }
    }
}

impl Display for ObjectKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.bucket, self.name)
    }
}

/// Result of a successful upload.
#[derive(Clone, Debug)]
pub struct StoredObject {
    pub key: ObjectKey,
    pub public_url: String,
}

pub trait ObjectStore {
    fn put(&self, bucket: &str, filename: &str, bytes: &[u8])
    -> Result<StoredObject, StorageError>;
    fn delete(&self, key: &ObjectKey) -> Result<(), StorageError>;
    fn public_url(&self, key: &ObjectKey) -> String;
}

/// Filesystem-backed object store serving objects from a public media URL.
#[derive(Clone, Debug)]
pub struct FsObjectStore {
    root: PathBuf,
    base_url: String,
}

impl FsObjectStore {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into(),
        }
    }

    fn object_path(&self, key: &ObjectKey) -> PathBuf {
        self.root.join(&key.bucket).join(&key.name)
    }
}

impl ObjectStore for FsObjectStore {
    fn put(
        &self,
        bucket: &str,
        filename: &str,
        bytes: &[u8],
    ) -> Result<StoredObject, StorageError> {
        // Object names are generated; only the extension survives from the
        // client-supplied filename.
        let name = match Path::new(filename).extension().and_then(|e| e.to_str()) {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext.to_lowercase()),
            None => Uuid::new_v4().to_string(),
        };
        let key = ObjectKey::new(bucket, name);

        let dir = self.root.join(bucket);
        fs::create_dir_all(&dir)?;
        fs::write(self.object_path(&key), bytes)?;

        Ok(StoredObject {
            public_url: self.public_url(&key),
            key,
        })
    }

    fn delete(&self, key: &ObjectKey) -> Result<(), StorageError> {
        if key.bucket.contains('/') || key.bucket == ".." || key.name.contains('/')
            || key.name == ".."
        {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        fs::remove_file(self.object_path(key))?;
        Ok(())
    }

    fn public_url(&self, key: &ObjectKey) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            key.bucket,
            key.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_then_delete_by_structured_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsObjectStore::new(dir.path(), "http://localhost:8080/media");

        let object = store
            .put(EQUIPMENT_IMAGE_BUCKET, "foto.PNG", b"imagen")
            .unwrap();
        assert_eq!(object.key.bucket, EQUIPMENT_IMAGE_BUCKET);
        assert!(object.key.name.ends_with(".png"));
        assert!(object.public_url.starts_with("http://localhost:8080/media/imagenes_equipo/"));
        assert!(dir.path().join(object.key.to_string()).exists());

        store.delete(&object.key).unwrap();
        assert!(!dir.path().join(object.key.to_string()).exists());
    }

    #[test]
    fn key_round_trips_its_persisted_form() {
        let key = ObjectKey::new(EQUIPMENT_IMAGE_BUCKET, "abc.png");
        let parsed = ObjectKey::parse(&key.to_string()).unwrap();
        assert_eq!(parsed, key);
    }

    #[test]
    fn malformed_keys_are_rejected() {
        assert!(ObjectKey::parse("no-separator").is_err());
        assert!(ObjectKey::parse("/empty-bucket").is_err());
        assert!(ObjectKey::parse("bucket/").is_err());
        assert!(ObjectKey::parse("bucket/a/b").is_err());
    }

    #[test]
    fn delete_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsObjectStore::new(dir.path(), "http://localhost:8080/media");
        let key = ObjectKey::new(EQUIPMENT_IMAGE_BUCKET, "..");
        assert!(matches!(
            store.delete(&key),
            Err(StorageError::InvalidKey(_))
        ));
    }
}
