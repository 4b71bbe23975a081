//! File-backed storage backend.
//!
//! Persists each key as one file under a root directory, which defaults to
//! the platform app data directory:
//!
//! - **macOS**: `~/Library/Application Support/app.gomarket.cart/`
//! - **Windows**: `%APPDATA%\gomarket\cart\data\`
//! - **Linux**: `~/.local/share/gomarketcart/`
//!
//! Set `GOMARKET_DATA_DIR` to override the root (useful in development).

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use directories::ProjectDirs;
use tracing::debug;

use super::{CartStorage, StorageError, StorageResult};

/// Key-value storage writing one file per key.
///
/// Keys are namespaced strings like `@GoMarket:cartproducts`; characters
/// that are unsafe in file names are mapped to `_`, and `.json` is
/// appended since every value we store is a JSON document.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Creates a file storage rooted at the given directory.
    ///
    /// The directory is created lazily on the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileStorage { root: root.into() }
    }

    /// Creates a file storage rooted at the platform app data directory.
    ///
    /// ## Development Override
    /// Set the `GOMARKET_DATA_DIR` environment variable to use a custom
    /// root instead.
    ///
    /// ## Errors
    /// `StorageError::Write` if no home directory can be determined for
    /// the current user.
    pub fn in_app_data() -> StorageResult<Self> {
        if let Ok(dir) = std::env::var("GOMARKET_DATA_DIR") {
            return Ok(FileStorage::new(dir));
        }

        let proj_dirs = ProjectDirs::from("app", "gomarket", "cart").ok_or_else(|| {
            StorageError::Write("could not determine app data directory".to_string())
        })?;

        Ok(FileStorage::new(proj_dirs.data_dir()))
    }

    /// Returns the root directory this storage writes under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a storage key to its backing file path.
    fn path_for(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect();
        self.root.join(format!("{}.json", safe))
    }
}

#[async_trait]
impl CartStorage for FileStorage {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key);

        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            // Nothing stored under this key yet
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read(format!("{}: {}", path.display(), e))),
        }
    }

    async fn set(&self, key: &str, value: String) -> StorageResult<()> {
        let path = self.path_for(key);

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| StorageError::Write(format!("{}: {}", self.root.display(), e)))?;

        debug!(key = %key, path = %path.display(), bytes = value.len(), "writing storage file");

        tokio::fs::write(&path, value)
            .await
            .map_err(|e| StorageError::Write(format!("{}: {}", path.display(), e)))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_storage() -> (FileStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        (storage, temp_dir)
    }

    #[tokio::test]
    async fn test_get_missing_key_is_none() {
        let (storage, _dir) = create_test_storage();
        assert_eq!(storage.get("@GoMarket:cartproducts").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get_round_trips() {
        let (storage, _dir) = create_test_storage();

        storage
            .set("@GoMarket:cartproducts", "[]".to_string())
            .await
            .unwrap();

        assert_eq!(
            storage.get("@GoMarket:cartproducts").await.unwrap(),
            Some("[]".to_string())
        );
    }

    #[tokio::test]
    async fn test_key_maps_to_sanitized_file_name() {
        let (storage, dir) = create_test_storage();

        storage
            .set("@GoMarket:cartproducts", "[]".to_string())
            .await
            .unwrap();

        let expected = dir.path().join("_GoMarket_cartproducts.json");
        assert!(expected.exists());
    }

    #[tokio::test]
    async fn test_set_creates_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("data").join("cart");
        let storage = FileStorage::new(&nested);

        storage.set("k", "v".to_string()).await.unwrap();

        assert_eq!(storage.get("k").await.unwrap(), Some("v".to_string()));
    }
}
