//! Local filesystem document storage.
//!
//! Fallback backend used when no object store is configured or remote
//! access fails. Documents live as `<name>.json` files under the data
//! directory.

use std::io::ErrorKind;
use std::path::PathBuf;

/// Filesystem-backed document store.
#[derive(Debug, Clone)]
pub struct LocalStore {
    data_dir: PathBuf,
}

impl LocalStore {
    /// Create a store rooted at `data_dir`. The directory is created on
    /// first write.
    #[must_use]
    pub const fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.data_dir.join(format!("{name}.json"))
    }

    /// Read a document. `Ok(None)` when the file does not exist.
    pub async fn read(&self, name: &str) -> std::io::Result<Option<String>> {
        match tokio::fs::read_to_string(self.path_for(name)).await {
            Ok(body) => Ok(Some(body)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Overwrite a document, creating the data directory if needed.
    pub async fn write(&self, name: &str, contents: &str) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.data_dir).await?;
        tokio::fs::write(self.path_for(name), contents).await
    }

    /// Delete a document. `Ok(false)` when the file did not exist.
    pub async fn delete(&self, name: &str) -> std::io::Result<bool> {
        match tokio::fs::remove_file(self.path_for(name)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }
}
