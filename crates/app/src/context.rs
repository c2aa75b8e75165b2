//! App Context

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::{
    catalog::{CatalogService, FixtureCatalog},
    orders::{
        FileOrdersService, JsonFileOrdersRepository, LogMailer, OrdersRepositoryError,
        OrdersService,
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to open the order store")]
    OrderStore(#[source] OrdersRepositoryError),
}

#[derive(Clone)]
pub struct AppContext {
    pub orders: Arc<dyn OrdersService>,
    pub catalog: Arc<dyn CatalogService>,
}

impl AppContext {
    pub fn new(orders: Arc<dyn OrdersService>, catalog: Arc<dyn CatalogService>) -> Self {
        Self { orders, catalog }
    }

    /// Build application context from the orders file path and the mail
    /// sender identity.
    ///
    /// # Errors
    ///
    /// Returns an error when the order store cannot be opened.
    pub fn from_orders_file(
        path: impl AsRef<Path>,
        mail_from: &str,
    ) -> Result<Self, AppInitError> {
        let repository = JsonFileOrdersRepository::open(path.as_ref())
            .map_err(AppInitError::OrderStore)?;

        Ok(Self {
            orders: Arc::new(FileOrdersService::new(repository, LogMailer::new(mail_from))),
            catalog: Arc::new(FixtureCatalog::new()),
        })
    }
}
