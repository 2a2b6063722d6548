// ==========================================
// Shipping Relay Planner - location grouper
// ==========================================
// Responsibility: partition a batch of orders by destination location
// and aggregate per-location totals.
// Constraint: the grouping key is the location name exactly as stored.
// No case or whitespace normalization: input fidelity is preserved
// rather than guessing intent.
// ==========================================

use std::collections::BTreeMap;

use tracing::instrument;

use crate::domain::order::Order;

// ==========================================
// LocationAggregate - one location's orders
// ==========================================
#[derive(Debug, Clone)]
pub struct LocationAggregate {
    pub orders: Vec<Order>,
    pub total_trays: u32,
    pub total_stacks: u32,
}

impl LocationAggregate {
    /// Recompute the stack total from every line of every order.
    /// Must always agree with `total_stacks` (which sums the per-order
    /// totals instead); the equivalence is a tested invariant.
    pub fn derived_total_stacks(&self) -> u32 {
        self.orders
            .iter()
            .flat_map(|o| o.items.iter())
            .map(|line| line.stacks_needed)
            .sum()
    }
}

// ==========================================
// LocationGrouper - grouping engine
// ==========================================
pub struct LocationGrouper {
    // stateless engine
}

impl LocationGrouper {
    pub fn new() -> Self {
        Self {}
    }

    /// Group orders by destination location.
    ///
    /// A location with no orders simply does not appear in the output;
    /// empty placeholder entries are never produced. The map is ordered
    /// by location name so downstream output is deterministic.
    #[instrument(skip(self, orders), fields(orders_count = orders.len()))]
    pub fn group_by_location(&self, orders: &[Order]) -> BTreeMap<String, LocationAggregate> {
        let mut groups: BTreeMap<String, LocationAggregate> = BTreeMap::new();

        for order in orders {
            let entry = groups
                .entry(order.location.clone())
                .or_insert_with(|| LocationAggregate {
                    orders: Vec::new(),
                    total_trays: 0,
                    total_stacks: 0,
                });
            entry.total_trays += order.total_trays;
            entry.total_stacks += order.total_stacks;
            entry.orders.push(order.clone());
        }

        groups
    }
}

impl Default for LocationGrouper {
    fn default() -> Self {
        Self::new()
    }
}
