//! Catalog lookup.

mod service;

pub use service::{CatalogService, FixtureCatalog, MockCatalogService};
