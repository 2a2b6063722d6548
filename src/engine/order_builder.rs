// ==========================================
// Shipping Relay Planner - order builder
// ==========================================
// Responsibility: turn raw line requests into an immutable Order.
// Input: route id + destination location + line requests + date/day
// Output: Order with per-line snapshots and aggregated totals
// Constraint: an order with zero valid lines is never created.
// Per-line problems skip the line with a recorded reason; corrupt
// catalog data aborts the whole order.
// ==========================================

use chrono::NaiveDate;
use tracing::{instrument, warn};
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::domain::order::{Order, OrderLine};
use crate::domain::types::DayTag;
use crate::engine::error::{OrderError, OrderResult};
use crate::engine::quantity::QuantityCalculator;

// ==========================================
// LineRequest - raw order input
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRequest {
    pub product_number: u32,
    pub units_ordered: u32,
}

/// A line request that was dropped from the order, with the reason.
#[derive(Debug, Clone)]
pub struct SkippedLine {
    pub request: LineRequest,
    pub reason: String,
}

/// Order creation output: the order plus the lines it had to drop.
#[derive(Debug, Clone)]
pub struct OrderBuildResult {
    pub order: Order,
    pub skipped_lines: Vec<SkippedLine>,
}

// ==========================================
// OrderBuilder - order aggregation engine
// ==========================================
pub struct OrderBuilder<'a> {
    catalog: &'a Catalog,
    calculator: QuantityCalculator,
}

impl<'a> OrderBuilder<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            calculator: QuantityCalculator::new(),
        }
    }

    /// Build one order for a route.
    ///
    /// Rules:
    /// 1) an invalid day tag is rejected before any computation
    /// 2) unknown products and zero-unit lines are skipped with a reason,
    ///    the rest of the order continues
    /// 3) units not on a tray multiple are normalized up, never down
    /// 4) a corrupt product spec aborts the order (`InvalidProductSpec`)
    /// 5) zero surviving lines fail with `EmptyOrder`
    ///
    /// The builder keeps no state across calls; collecting orders into
    /// a batch is the caller's job.
    #[instrument(skip(self, lines), fields(lines_count = lines.len()))]
    pub fn create_order(
        &self,
        route_id: u32,
        location: &str,
        lines: &[LineRequest],
        order_date: NaiveDate,
        day_tag: Option<u8>,
    ) -> OrderResult<OrderBuildResult> {
        // 1. Day tag gate
        let day_tag = match day_tag {
            Some(n) => Some(DayTag::from_number(n).ok_or(OrderError::InvalidDayTag(n))?),
            None => None,
        };

        // 2. Per-line processing
        let mut items = Vec::new();
        let mut skipped_lines = Vec::new();
        let mut total_trays = 0u32;
        let mut total_stacks = 0u32;

        for request in lines {
            if request.units_ordered == 0 {
                warn!(
                    product_number = request.product_number,
                    "skipping line: zero units ordered"
                );
                skipped_lines.push(SkippedLine {
                    request: *request,
                    reason: "ZERO_UNITS".to_string(),
                });
                continue;
            }

            let spec = match self.catalog.product(request.product_number) {
                Some(spec) => spec,
                None => {
                    warn!(
                        product_number = request.product_number,
                        "skipping line: unknown product"
                    );
                    skipped_lines.push(SkippedLine {
                        request: *request,
                        reason: format!("UNKNOWN_PRODUCT: {}", request.product_number),
                    });
                    continue;
                }
            };

            // Normalize up to a tray multiple, then convert. A corrupt
            // spec fails the whole order here; see engine error policy.
            let units_ordered = self
                .calculator
                .normalize_to_tray_multiple(spec, request.units_ordered)?;
            let quantities = self.calculator.compute(spec, units_ordered)?;

            total_trays += quantities.trays_needed;
            total_stacks += quantities.stacks_needed;

            items.push(OrderLine {
                product_number: spec.product_number,
                product_name: spec.name.clone(),
                units_ordered,
                units_per_tray: spec.units_per_tray,
                trays_needed: quantities.trays_needed,
                stack_height: spec.stack_height,
                stacks_needed: quantities.stacks_needed,
                tray_type: spec.tray_type.clone(),
            });
        }

        // 3. An order must represent a non-trivial shipment
        if items.is_empty() {
            return Err(OrderError::EmptyOrder);
        }

        let order = Order {
            order_id: generate_order_id(day_tag),
            route_id,
            location: location.to_string(),
            order_date,
            day_tag,
            items,
            total_trays,
            total_stacks,
        };

        Ok(OrderBuildResult {
            order,
            skipped_lines,
        })
    }
}

/// Generate a unique order id, carrying the day tag when present.
fn generate_order_id(day_tag: Option<DayTag>) -> String {
    match day_tag {
        Some(tag) => format!("ORD-D{}-{}", tag.as_number(), Uuid::new_v4().simple()),
        None => format!("ORD-{}", Uuid::new_v4().simple()),
    }
}
