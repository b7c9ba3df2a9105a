//! Store abstraction over the hosted catalog resource.
//!
//! The catalog lives in a third-party REST CRUD store. This module defines
//! the common interface the rest of the application talks to, along with the
//! payload type and error taxonomy for store operations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::catalog::Layout;

pub mod rest;

pub use rest::RestStore;

/// Errors surfaced by store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Service returned status {0}")]
    Api(u16),

    #[error("Store error: {0}")]
    Other(String),
}

/// Payload for creating or replacing a layout.
///
/// Identical to [`Layout`] minus the id, which the service assigns. Updates
/// send the full record (PUT semantics), so there is a single draft type for
/// both operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDraft {
    pub room_name: String,
    pub width: f64,
    pub length: f64,
    pub image: Option<String>,
    pub notes: Option<String>,
    pub price: f64,
    pub discount: f64,
    pub available: bool,
}

/// Interface to the remote catalog store.
///
/// One production implementation exists ([`RestStore`]); the trait keeps the
/// UI and service layers independent of the HTTP plumbing.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Fetch the full collection.
    async fn fetch_layouts(&self) -> Result<Vec<Layout>, StoreError>;

    /// Fetch a single record by id.
    async fn fetch_layout(&self, id: &str) -> Result<Layout, StoreError>;

    /// Create a record; the store assigns the id.
    async fn create_layout(&self, draft: &LayoutDraft) -> Result<Layout, StoreError>;

    /// Replace a record by id with the full payload.
    async fn update_layout(&self, id: &str, draft: &LayoutDraft) -> Result<Layout, StoreError>;

    /// Delete a record by id.
    async fn delete_layout(&self, id: &str) -> Result<(), StoreError>;
}
