// ==========================================
// Shipping Relay Planner - order domain model
// ==========================================
// Constraint: orders are immutable once created. The system never edits
// a placed order, it only regenerates a fresh batch.
// ==========================================

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::DayTag;

// ==========================================
// OrderLine - per-product line snapshot
// ==========================================
// A snapshot, not a live catalog reference: units_per_tray, stack_height
// and tray_type are copied at creation time so a later catalog change
// cannot silently rewrite history.
//
// Invariants (enforced by the order builder, re-checked on batch load):
// - units_ordered is a non-negative multiple of units_per_tray
// - trays_needed  = ceil(units_ordered / units_per_tray)
// - stacks_needed = ceil(trays_needed / stack_height)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_number: u32,
    pub product_name: String,
    pub units_ordered: u32,
    pub units_per_tray: u32,
    pub trays_needed: u32,
    pub stack_height: u32,
    pub stacks_needed: u32,
    pub tray_type: String,
}

// ==========================================
// Order - one route's confirmed shipment
// ==========================================
// total_trays / total_stacks are stored redundantly with the line values;
// recomputing them from `items` must always reproduce the stored sums.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub route_id: u32,
    pub location: String,              // destination location name
    pub order_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_tag: Option<DayTag>,       // delivery-day cycle label
    pub items: Vec<OrderLine>,
    pub total_trays: u32,
    pub total_stacks: u32,
}

impl Order {
    /// Recompute the tray total from the line snapshots.
    pub fn derived_total_trays(&self) -> u32 {
        self.items.iter().map(|line| line.trays_needed).sum()
    }

    /// Recompute the stack total from the line snapshots.
    pub fn derived_total_stacks(&self) -> u32 {
        self.items.iter().map(|line| line.stacks_needed).sum()
    }

    /// Whether the stored totals agree with the line snapshots.
    pub fn totals_consistent(&self) -> bool {
        self.total_trays == self.derived_total_trays()
            && self.total_stacks == self.derived_total_stacks()
    }
}

// ==========================================
// OrderBatch - one persisted relay input set
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderBatch {
    pub orders: Vec<Order>,
    pub metadata: BatchMetadata,
}

/// Confirmation metadata recorded when a batch is written out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchMetadata {
    pub confirmed_date: NaiveDate,
    pub confirmed_day: DayTag,
    pub total_orders: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
}
