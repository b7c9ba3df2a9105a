//! Catalog service: the async facade the UI talks to.
//!
//! Wraps the store behind a clonable handle and records every remote
//! operation in the shared activity log.

use log::{error, info};
use std::sync::Arc;

use crate::catalog::Layout;
use crate::logger::Logger;
use crate::store::{CatalogStore, LayoutDraft, StoreError};

/// Clonable handle over the catalog store.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
    logger: Logger,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self {
            store,
            logger: Logger::new(),
        }
    }

    /// The shared activity log
    #[must_use]
    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Fetch the full collection from the store.
    pub async fn load_layouts(&self) -> Result<Vec<Layout>, StoreError> {
        match self.store.fetch_layouts().await {
            Ok(layouts) => {
                info!("Fetched {} layouts", layouts.len());
                self.logger.log(format!("Fetched {} layouts", layouts.len()));
                Ok(layouts)
            }
            Err(e) => {
                error!("Failed to fetch layouts: {e}");
                self.logger.log(format!("Failed to fetch layouts: {e}"));
                Err(e)
            }
        }
    }

    /// Fetch a single record, used to pre-fill the edit form.
    pub async fn get_layout(&self, id: &str) -> Result<Layout, StoreError> {
        match self.store.fetch_layout(id).await {
            Ok(layout) => Ok(layout),
            Err(e) => {
                error!("Failed to fetch layout {id}: {e}");
                self.logger.log(format!("Failed to fetch layout {id}: {e}"));
                Err(e)
            }
        }
    }

    /// Create a new record from a draft.
    pub async fn create_layout(&self, draft: &LayoutDraft) -> Result<Layout, StoreError> {
        match self.store.create_layout(draft).await {
            Ok(layout) => {
                info!("Created layout {} ({})", layout.room_name, layout.id);
                self.logger.log(format!("Created layout {}", layout.room_name));
                Ok(layout)
            }
            Err(e) => {
                error!("Failed to create layout: {e}");
                self.logger.log(format!("Failed to create layout: {e}"));
                Err(e)
            }
        }
    }

    /// Replace a record with the full draft payload.
    pub async fn update_layout(&self, id: &str, draft: &LayoutDraft) -> Result<Layout, StoreError> {
        match self.store.update_layout(id, draft).await {
            Ok(layout) => {
                info!("Updated layout {} ({})", layout.room_name, layout.id);
                self.logger.log(format!("Updated layout {}", layout.room_name));
                Ok(layout)
            }
            Err(e) => {
                error!("Failed to update layout {id}: {e}");
                self.logger.log(format!("Failed to update layout {id}: {e}"));
                Err(e)
            }
        }
    }

    /// Delete a record by id.
    pub async fn delete_layout(&self, id: &str) -> Result<(), StoreError> {
        match self.store.delete_layout(id).await {
            Ok(()) => {
                info!("Deleted layout {id}");
                self.logger.log(format!("Deleted layout {id}"));
                Ok(())
            }
            Err(e) => {
                error!("Failed to delete layout {id}: {e}");
                self.logger.log(format!("Failed to delete layout {id}: {e}"));
                Err(e)
            }
        }
    }
}
