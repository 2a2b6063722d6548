// ==========================================
// Shipping Relay Planner - order batch repository
// ==========================================
// Responsibility: persist a confirmed order batch as one JSON file and
// load it back for relay generation.
// Constraint: loading re-derives every computed field and rejects a
// batch whose stored values disagree. Stored data is never trusted
// over recomputation.
// ==========================================

use std::path::Path;

use tracing::{info, instrument};

use crate::domain::order::{Order, OrderBatch};
use crate::repository::error::{RepositoryError, RepositoryResult};

// ==========================================
// OrderBatchRepository - JSON file adapter
// ==========================================
pub struct OrderBatchRepository {
    // stateless adapter
}

impl OrderBatchRepository {
    pub fn new() -> Self {
        Self {}
    }

    /// Write a batch to `path` as pretty-printed JSON.
    #[instrument(skip(self, batch, path), fields(path = %path.display(), orders = batch.orders.len()))]
    pub fn save(&self, path: &Path, batch: &OrderBatch) -> RepositoryResult<()> {
        verify_batch(batch)?;

        let json = serde_json::to_string_pretty(batch).map_err(|e| {
            RepositoryError::FileWriteError {
                path: path.display().to_string(),
                message: e.to_string(),
            }
        })?;

        std::fs::write(path, json).map_err(|e| RepositoryError::FileWriteError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        info!(orders = batch.orders.len(), "order batch saved");
        Ok(())
    }

    /// Read a batch from `path`, re-derive all computed fields and
    /// fail on any mismatch with the stored values.
    #[instrument(skip(self, path), fields(path = %path.display()))]
    pub fn load(&self, path: &Path) -> RepositoryResult<OrderBatch> {
        if !path.exists() {
            return Err(RepositoryError::FileNotFound(path.display().to_string()));
        }

        let raw = std::fs::read_to_string(path).map_err(|e| RepositoryError::FileReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let batch: OrderBatch =
            serde_json::from_str(&raw).map_err(|e| RepositoryError::JsonParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        verify_batch(&batch)?;

        info!(orders = batch.orders.len(), "order batch loaded");
        Ok(batch)
    }
}

impl Default for OrderBatchRepository {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// Consistency checks
// ==========================================

/// Re-derive every computed field of a batch and compare with the
/// stored values. The round-trip property: serialize, deserialize,
/// recompute, and everything matches exactly.
pub fn verify_batch(batch: &OrderBatch) -> RepositoryResult<()> {
    if batch.metadata.total_orders != batch.orders.len() {
        return Err(RepositoryError::MetadataMismatch(format!(
            "metadata.total_orders={} but batch holds {} orders",
            batch.metadata.total_orders,
            batch.orders.len()
        )));
    }

    for order in &batch.orders {
        verify_order(order)?;
    }

    Ok(())
}

fn verify_order(order: &Order) -> RepositoryResult<()> {
    for line in &order.items {
        if line.units_per_tray == 0 || line.stack_height == 0 {
            return Err(RepositoryError::ConsistencyViolation {
                order_id: order.order_id.clone(),
                message: format!(
                    "line product_number={} has zero units_per_tray or stack_height",
                    line.product_number
                ),
            });
        }

        if line.units_ordered % line.units_per_tray != 0 {
            return Err(RepositoryError::ConsistencyViolation {
                order_id: order.order_id.clone(),
                message: format!(
                    "line product_number={}: units_ordered={} is not a multiple of units_per_tray={}",
                    line.product_number, line.units_ordered, line.units_per_tray
                ),
            });
        }

        let trays = line.units_ordered.div_ceil(line.units_per_tray);
        if line.trays_needed != trays {
            return Err(RepositoryError::ConsistencyViolation {
                order_id: order.order_id.clone(),
                message: format!(
                    "line product_number={}: stored trays_needed={} but recomputed {}",
                    line.product_number, line.trays_needed, trays
                ),
            });
        }

        let stacks = trays.div_ceil(line.stack_height);
        if line.stacks_needed != stacks {
            return Err(RepositoryError::ConsistencyViolation {
                order_id: order.order_id.clone(),
                message: format!(
                    "line product_number={}: stored stacks_needed={} but recomputed {}",
                    line.product_number, line.stacks_needed, stacks
                ),
            });
        }
    }

    if !order.totals_consistent() {
        return Err(RepositoryError::ConsistencyViolation {
            order_id: order.order_id.clone(),
            message: format!(
                "stored totals trays={}/stacks={} but lines sum to trays={}/stacks={}",
                order.total_trays,
                order.total_stacks,
                order.derived_total_trays(),
                order.derived_total_stacks()
            ),
        });
    }

    Ok(())
}
