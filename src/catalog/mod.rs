// ==========================================
// Shipping Relay Planner - catalog layer
// ==========================================
// Responsibility: product and route reference data ingestion.
// Storage: flat JSON files (products.json, routes.json).
// ==========================================

pub mod error;
pub mod loader;

pub use error::{CatalogError, CatalogResult};
pub use loader::Catalog;
