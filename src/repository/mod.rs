// ==========================================
// Shipping Relay Planner - repository layer
// ==========================================
// Responsibility: order-batch persistence.
// Storage: one JSON file per confirmed date/day batch.
// ==========================================

pub mod batch_repo;
pub mod error;

pub use batch_repo::{verify_batch, OrderBatchRepository};
pub use error::{RepositoryError, RepositoryResult};
