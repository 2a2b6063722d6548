// ==========================================
// Shipping Relay Planner - core library
// ==========================================
// Converts per-product order quantities into trays and stacks, groups
// orders by destination location, partitions each location's stack
// volume across 98-stack trailers, and tracks every trailer through
// its dispatch lifecycle.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and types
pub mod domain;

// Engine layer - business rules
pub mod engine;

// Catalog layer - reference data ingestion
pub mod catalog;

// Repository layer - order batch persistence
pub mod repository;

// Configuration
pub mod config;

// Logging
pub mod logging;

// ==========================================
// Re-export core types
// ==========================================

// Domain types
pub use domain::{
    BatchMetadata, DayTag, LocationPlan, Order, OrderBatch, OrderLine, OverloadSource,
    ProductSpec, RelaySession, Route, Trailer, TRAILER_CAPACITY_STACKS,
};

// Engines
pub use engine::{
    DispatchOutcome, InboundAnalyzer, LineRequest, LoadIdSequence, LocationGrouper,
    OrderBuilder, OrderError, QuantityCalculator, RelayPlanner, TrailerAllocator,
    TrailerError, TrailerLifecycle,
};

// Catalog and persistence
pub use catalog::{Catalog, CatalogError};
pub use repository::{OrderBatchRepository, RepositoryError};

// ==========================================
// Constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// System name
pub const APP_NAME: &str = "Shipping Relay Planner";
