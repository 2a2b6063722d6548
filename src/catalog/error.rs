// ==========================================
// Shipping Relay Planner - catalog error types
// ==========================================
// Tool: thiserror derive macro
// ==========================================

use thiserror::Error;

/// Catalog loading errors. Corrupt reference data is fatal for the
/// whole load: no order may ever be built against an untrusted spec.
#[derive(Error, Debug)]
pub enum CatalogError {
    // ===== File errors =====
    #[error("catalog file not found: {0}")]
    FileNotFound(String),

    #[error("catalog file read failed ({path}): {message}")]
    FileReadError { path: String, message: String },

    #[error("catalog JSON parse failed ({path}): {message}")]
    JsonParseError { path: String, message: String },

    // ===== Data quality errors =====
    #[error("invalid product spec (product_number={product_number}): {message}")]
    InvalidProductSpec {
        product_number: u32,
        message: String,
    },

    #[error("duplicate product number in catalog: {0}")]
    DuplicateProduct(u32),

    #[error("duplicate route number in catalog: {0}")]
    DuplicateRoute(u32),

    // ===== Generic =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;
