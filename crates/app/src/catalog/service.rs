//! Catalog service.

use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;

use nexus_core::{
    fixtures,
    products::{Category, Product},
};

/// Read-only product lookup. The storefront never mutates the catalog.
#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// All products.
    async fn list_products(&self) -> Vec<Product>;

    /// A single product, or `None` when the id is unknown.
    async fn get_by_id(&self, id: &str) -> Option<Product>;

    /// Products in one category section.
    async fn list_by_category(&self, category: Category) -> Vec<Product>;
}

/// Catalog backed by the fixture product set, served after a simulated
/// network latency so the UI exercises its loading states. Each operation
/// carries its own delay.
#[derive(Debug, Clone)]
pub struct FixtureCatalog {
    list_latency: Duration,
    get_latency: Duration,
    category_latency: Duration,
}

impl Default for FixtureCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureCatalog {
    pub fn new() -> Self {
        Self {
            list_latency: Duration::from_millis(500),
            get_latency: Duration::from_millis(300),
            category_latency: Duration::from_millis(400),
        }
    }

    /// Override every simulated latency; tests pass `Duration::ZERO`.
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            list_latency: latency,
            get_latency: latency,
            category_latency: latency,
        }
    }

    async fn simulate_latency(latency: Duration) {
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl CatalogService for FixtureCatalog {
    async fn list_products(&self) -> Vec<Product> {
        Self::simulate_latency(self.list_latency).await;

        fixtures::products()
    }

    async fn get_by_id(&self, id: &str) -> Option<Product> {
        Self::simulate_latency(self.get_latency).await;

        fixtures::product(id)
    }

    async fn list_by_category(&self, category: Category) -> Vec<Product> {
        Self::simulate_latency(self.category_latency).await;

        fixtures::products()
            .into_iter()
            .filter(|p| p.category == category)
            .collect()
    }
}
