// ==========================================
// Shipping Relay Planner - quantity calculator
// ==========================================
// Responsibility: unit -> tray -> stack conversion.
// Input: product spec + units ordered
// Output: (trays needed, stacks needed)
// Constraint: ceiling semantics everywhere; fractional trays or stacks
// cannot exist physically. Pure and deterministic, safe to call from
// any number of callers.
// ==========================================

use crate::domain::product::ProductSpec;
use crate::engine::error::{OrderError, OrderResult};

// ==========================================
// QuantityCalculator - conversion engine
// ==========================================
pub struct QuantityCalculator {
    // stateless engine
}

/// Trays and stacks required for one order line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantities {
    pub trays_needed: u32,
    pub stacks_needed: u32,
}

impl QuantityCalculator {
    pub fn new() -> Self {
        Self {}
    }

    /// Compute trays and stacks for `units_ordered` of a product.
    ///
    /// - `trays_needed  = ceil(units_ordered / units_per_tray)`
    /// - `stacks_needed = ceil(trays_needed / stack_height)`
    ///
    /// # Errors
    /// `InvalidProductSpec` when the spec carries a non-positive
    /// `units_per_tray` or `stack_height`. Quantities derived from such
    /// a spec cannot be trusted, so the computation refuses to divide.
    pub fn compute(&self, spec: &ProductSpec, units_ordered: u32) -> OrderResult<Quantities> {
        if !spec.has_valid_factors() {
            return Err(OrderError::InvalidProductSpec {
                product_number: spec.product_number,
                message: format!(
                    "units_per_tray={}, stack_height={} (both must be > 0)",
                    spec.units_per_tray, spec.stack_height
                ),
            });
        }

        let trays_needed = units_ordered.div_ceil(spec.units_per_tray);
        let stacks_needed = trays_needed.div_ceil(spec.stack_height);

        Ok(Quantities {
            trays_needed,
            stacks_needed,
        })
    }

    /// Round `units_ordered` up to the next multiple of the tray size.
    ///
    /// Ordering is only physical in whole trays. Rounding is always up:
    /// truncating down would under-report shipped volume.
    pub fn normalize_to_tray_multiple(
        &self,
        spec: &ProductSpec,
        units_ordered: u32,
    ) -> OrderResult<u32> {
        if !spec.has_valid_factors() {
            return Err(OrderError::InvalidProductSpec {
                product_number: spec.product_number,
                message: format!(
                    "units_per_tray={}, stack_height={} (both must be > 0)",
                    spec.units_per_tray, spec.stack_height
                ),
            });
        }

        Ok(units_ordered.div_ceil(spec.units_per_tray) * spec.units_per_tray)
    }
}

impl Default for QuantityCalculator {
    fn default() -> Self {
        Self::new()
    }
}
