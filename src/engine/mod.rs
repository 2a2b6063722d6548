// ==========================================
// Shipping Relay Planner - engine layer
// ==========================================
// Responsibility: the business rules. Pure, synchronous call/return;
// no I/O, no hidden state, every rejection carries a reason.
// ==========================================

pub mod allocator;
pub mod error;
pub mod grouper;
pub mod inbound;
pub mod lifecycle;
pub mod order_builder;
pub mod planner;
pub mod quantity;

// Re-export core engines
pub use allocator::{LoadIdSequence, TrailerAllocator};
pub use error::{OrderError, OrderResult, TrailerError, TrailerResult};
pub use grouper::{LocationAggregate, LocationGrouper};
pub use inbound::{InboundAnalyzer, InboundDemand};
pub use lifecycle::{DispatchOutcome, TrailerLifecycle};
pub use order_builder::{LineRequest, OrderBuildResult, OrderBuilder, SkippedLine};
pub use planner::RelayPlanner;
pub use quantity::{Quantities, QuantityCalculator};
