//! Remote object store client.
//!
//! Speaks plain HTTP to an object store: documents are addressed as
//! `{endpoint}/{container}/{name}.json` and authenticated with a bearer
//! token. Only the blob layer sees these errors; callers of
//! [`super::BlobStorage`] get defaults and booleans instead.

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

/// Errors from the remote object store.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Transport-level failure (connection refused, DNS, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered with an unexpected status.
    #[error("unexpected status {0} for {1}")]
    UnexpectedStatus(StatusCode, String),
}

/// HTTP client for one container of the object store.
#[derive(Debug, Clone)]
pub struct RemoteStore {
    client: reqwest::Client,
    endpoint: Url,
    container: String,
    access_key: SecretString,
}

impl RemoteStore {
    /// Create a client from blob configuration.
    #[must_use]
    pub fn new(config: &crate::config::BlobConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            container: config.container.clone(),
            access_key: config.access_key.clone(),
        }
    }

    /// The container this client writes into.
    #[must_use]
    pub fn container(&self) -> &str {
        &self.container
    }

    fn container_url(&self) -> String {
        format!(
            "{}/{}",
            self.endpoint.as_str().trim_end_matches('/'),
            self.container
        )
    }

    fn blob_url(&self, name: &str) -> String {
        format!("{}/{name}.json", self.container_url())
    }

    /// Create the container if it does not exist.
    pub async fn ensure_container(&self) -> Result<(), RemoteError> {
        let url = self.container_url();
        let response = self
            .client
            .put(&url)
            .bearer_auth(self.access_key.expose_secret())
            .send()
            .await?;

        match response.status() {
            status if status.is_success() || status == StatusCode::CONFLICT => Ok(()),
            status => Err(RemoteError::UnexpectedStatus(status, url)),
        }
    }

    /// Fetch a document body. `Ok(None)` when the blob does not exist.
    pub async fn get(&self, name: &str) -> Result<Option<String>, RemoteError> {
        let url = self.blob_url(name);
        let response = self
            .client
            .get(&url)
            .bearer_auth(self.access_key.expose_secret())
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.text().await?)),
            status => Err(RemoteError::UnexpectedStatus(status, url)),
        }
    }

    /// Overwrite a document in one request.
    pub async fn put(&self, name: &str, body: String) -> Result<(), RemoteError> {
        let url = self.blob_url(name);
        let response = self
            .client
            .put(&url)
            .bearer_auth(self.access_key.expose_secret())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(()),
            status => Err(RemoteError::UnexpectedStatus(status, url)),
        }
    }

    /// Delete a document. `Ok(false)` when it did not exist.
    pub async fn delete(&self, name: &str) -> Result<bool, RemoteError> {
        let url = self.blob_url(name);
        let response = self
            .client
            .delete(&url)
            .bearer_auth(self.access_key.expose_secret())
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(false),
            status if status.is_success() => Ok(true),
            status => Err(RemoteError::UnexpectedStatus(status, url)),
        }
    }
}
