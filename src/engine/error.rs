// ==========================================
// Shipping Relay Planner - engine error types
// ==========================================
// Tool: thiserror derive macro
// Constraint: every rejection is a distinguishable kind, never a
// generic failure. Recoverable per-line problems are not errors at
// all; they travel as skipped-line data alongside the result.
// ==========================================

use thiserror::Error;

/// Order creation errors. All of these fail the order being built and
/// leave any previously built orders untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    // ===== Catalog resolution =====
    // Unknown products are not an error: they travel as skipped-line
    // data and the rest of the order continues.
    #[error("invalid product spec (product_number={product_number}): {message}")]
    InvalidProductSpec {
        product_number: u32,
        message: String,
    },

    // ===== Order-level validation =====
    #[error("order has no valid line items")]
    EmptyOrder,

    #[error("invalid day tag: {0} (valid: 1, 2, 4, 5, 6)")]
    InvalidDayTag(u8),
}

/// Trailer lifecycle errors: any attempted mutation of a frozen trailer.
/// Rejected whole; no partial mutation is ever applied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrailerError {
    #[error("trailer #{trailer_no} is already dispatched")]
    AlreadyDispatched { trailer_no: u32 },
}

/// Result type aliases
pub type OrderResult<T> = Result<T, OrderError>;
pub type TrailerResult<T> = Result<T, TrailerError>;
