//! REST implementation of the catalog store.

use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

use super::{CatalogStore, LayoutDraft, StoreError};
use crate::catalog::Layout;

/// Client for the hosted REST CRUD resource.
///
/// The store exposes a plain collection endpoint: GET for the list and for
/// single records, POST to create, PUT to replace, DELETE to remove. No
/// authentication, no custom headers.
pub struct RestStore {
    client: reqwest::Client,
    collection_url: String,
}

impl RestStore {
    /// Build a client for `{base_url}/{resource}`.
    pub fn new(base_url: &str, resource: &str, timeout: Duration) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::Other(e.to_string()))?;

        let collection_url = format!("{}/{}", base_url.trim_end_matches('/'), resource);

        Ok(Self {
            client,
            collection_url,
        })
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url, id)
    }

    fn network_error(error: reqwest::Error) -> StoreError {
        StoreError::Network(error.to_string())
    }

    async fn decode<T>(response: reqwest::Response) -> Result<T, StoreError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(response.url().path().to_string()));
        }
        if !status.is_success() {
            return Err(StoreError::Api(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| StoreError::InvalidData(e.to_string()))
    }
}

#[async_trait]
impl CatalogStore for RestStore {
    async fn fetch_layouts(&self) -> Result<Vec<Layout>, StoreError> {
        let response = self
            .client
            .get(&self.collection_url)
            .send()
            .await
            .map_err(Self::network_error)?;

        Self::decode(response).await
    }

    async fn fetch_layout(&self, id: &str) -> Result<Layout, StoreError> {
        let response = self
            .client
            .get(self.record_url(id))
            .send()
            .await
            .map_err(Self::network_error)?;

        Self::decode(response).await
    }

    async fn create_layout(&self, draft: &LayoutDraft) -> Result<Layout, StoreError> {
        let response = self
            .client
            .post(&self.collection_url)
            .json(draft)
            .send()
            .await
            .map_err(Self::network_error)?;

        Self::decode(response).await
    }

    async fn update_layout(&self, id: &str, draft: &LayoutDraft) -> Result<Layout, StoreError> {
        let response = self
            .client
            .put(self.record_url(id))
            .json(draft)
            .send()
            .await
            .map_err(Self::network_error)?;

        Self::decode(response).await
    }

    async fn delete_layout(&self, id: &str) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(self.record_url(id))
            .send()
            .await
            .map_err(Self::network_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(id.to_string()));
        }
        if !status.is_success() {
            return Err(StoreError::Api(status.as_u16()));
        }

        Ok(())
    }
}
