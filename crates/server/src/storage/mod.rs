//! Blob-backed document storage.
//!
//! One JSON document per logical collection, stored either in a remote
//! object store or, as a transparent fallback, as files under a local data
//! directory. Every save overwrites the whole document in one shot; there
//! are no partial updates.
//!
//! # Error policy
//!
//! No raw I/O error escapes this layer. Loads degrade to the local copy and
//! then to the caller-supplied default; saves and deletes report failure as
//! `false`. Everything is logged.

mod local;
mod remote;

pub use local::LocalStore;
pub use remote::{RemoteError, RemoteStore};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ServerConfig;

/// Document storage with construction-time backend selection.
///
/// The backend is chosen once, from configuration: a remote client when an
/// endpoint is configured, otherwise local files. Callers see identical
/// signatures and return shapes either way.
#[derive(Debug, Clone)]
pub enum BlobStorage {
    /// Remote object store, with a local copy consulted when the remote
    /// fails for operational reasons.
    Remote {
        remote: RemoteStore,
        local: LocalStore,
    },
    /// Local filesystem only.
    Local(LocalStore),
}

impl BlobStorage {
    /// Select a backend from configuration.
    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        let local = LocalStore::new(config.data_dir.clone());

        match config.blob.as_ref() {
            Some(blob) => Self::Remote {
                remote: RemoteStore::new(blob),
                local,
            },
            None => {
                tracing::warn!("no object store configured; using local storage fallback");
                Self::Local(local)
            }
        }
    }

    /// Make sure the remote container exists. No-op for local storage;
    /// failures are logged and swallowed.
    pub async fn ensure_container(&self) {
        if let Self::Remote { remote, .. } = self {
            match remote.ensure_container().await {
                Ok(()) => tracing::info!(container = remote.container(), "container is ready"),
                Err(e) => tracing::error!(error = %e, "failed to ensure container"),
            }
        }
    }

    /// Load a collection document, or `default` when it exists nowhere.
    ///
    /// Remote transport failures fall back to the local copy; a missing
    /// document or malformed JSON yields the default.
    pub async fn load<T: DeserializeOwned>(&self, name: &str, default: T) -> T {
        match self {
            Self::Remote { remote, local } => match remote.get(name).await {
                Ok(Some(body)) => parse_document(name, &body).unwrap_or(default),
                Ok(None) => {
                    tracing::debug!(collection = name, "document does not exist, using default");
                    default
                }
                Err(e) => {
                    tracing::warn!(collection = name, error = %e, "remote load failed, trying local copy");
                    Self::load_local(local, name, default).await
                }
            },
            Self::Local(local) => Self::load_local(local, name, default).await,
        }
    }

    /// Serialize and overwrite the whole collection document.
    ///
    /// Returns `false` on any failure.
    pub async fn save<T: Serialize + Sync>(&self, name: &str, data: &T) -> bool {
        let body = match serde_json::to_string_pretty(data) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(collection = name, error = %e, "failed to serialize document");
                return false;
            }
        };

        match self {
            Self::Remote { remote, .. } => match remote.put(name, body).await {
                Ok(()) => {
                    tracing::debug!(collection = name, "document saved to blob");
                    true
                }
                Err(e) => {
                    tracing::error!(collection = name, error = %e, "failed to save document");
                    false
                }
            },
            Self::Local(local) => match local.write(name, &body).await {
                Ok(()) => true,
                Err(e) => {
                    tracing::error!(collection = name, error = %e, "failed to save document locally");
                    false
                }
            },
        }
    }

    /// Delete a collection document. Returns `false` if it did not exist
    /// or the delete failed.
    pub async fn delete(&self, name: &str) -> bool {
        match self {
            Self::Remote { remote, .. } => match remote.delete(name).await {
                Ok(deleted) => deleted,
                Err(e) => {
                    tracing::error!(collection = name, error = %e, "failed to delete document");
                    false
                }
            },
            Self::Local(local) => match local.delete(name).await {
                Ok(deleted) => deleted,
                Err(e) => {
                    tracing::error!(collection = name, error = %e, "failed to delete local document");
                    false
                }
            },
        }
    }

    async fn load_local<T: DeserializeOwned>(local: &LocalStore, name: &str, default: T) -> T {
        match local.read(name).await {
            Ok(Some(body)) => parse_document(name, &body).unwrap_or(default),
            Ok(None) => default,
            Err(e) => {
                tracing::error!(collection = name, error = %e, "failed to load local document");
                default
            }
        }
    }
}

fn parse_document<T: DeserializeOwned>(name: &str, body: &str) -> Option<T> {
    match serde_json::from_str(body) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::error!(collection = name, error = %e, "malformed document, using default");
            None
        }
    }
}
