// ==========================================
// Shipping Relay Planner - domain model layer
// ==========================================
// Responsibility: domain entities, types and their local invariants.
// Constraint: no file access, no engine logic.
// ==========================================

pub mod order;
pub mod product;
pub mod relay;
pub mod types;

// Re-export core types
pub use order::{BatchMetadata, Order, OrderBatch, OrderLine};
pub use product::{ProductSpec, Route};
pub use relay::{
    LocationPlan, OverloadSource, RelaySession, Trailer, TRAILER_CAPACITY_STACKS,
};
pub use types::DayTag;
