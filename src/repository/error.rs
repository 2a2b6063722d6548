// ==========================================
// Shipping Relay Planner - repository error types
// ==========================================
// Tool: thiserror derive macro
// ==========================================

use thiserror::Error;

/// Order-batch persistence errors.
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== File errors =====
    #[error("batch file not found: {0}")]
    FileNotFound(String),

    #[error("batch file read failed ({path}): {message}")]
    FileReadError { path: String, message: String },

    #[error("batch file write failed ({path}): {message}")]
    FileWriteError { path: String, message: String },

    #[error("batch JSON parse failed ({path}): {message}")]
    JsonParseError { path: String, message: String },

    // ===== Consistency errors =====
    // A loaded batch whose stored derived fields disagree with a fresh
    // recomputation is rejected rather than silently trusted.
    #[error("batch consistency violation (order_id={order_id}): {message}")]
    ConsistencyViolation { order_id: String, message: String },

    #[error("batch metadata mismatch: {0}")]
    MetadataMismatch(String),

    // ===== Generic =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias
pub type RepositoryResult<T> = Result<T, RepositoryError>;
