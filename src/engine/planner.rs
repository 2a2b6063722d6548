// ==========================================
// Shipping Relay Planner - relay planner (orchestrator)
// ==========================================
// Responsibility: coordinate grouper and allocator into one relay run.
// Input: a batch of orders
// Output: RelaySession owned by the caller
// Constraint: pure and stateless. There is no process-wide "current
// relay"; regeneration from the same batch is cheap and idempotent
// on the trailer load sequences.
// ==========================================

use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::order::Order;
use crate::domain::relay::{LocationPlan, RelaySession};
use crate::engine::allocator::{LoadIdSequence, TrailerAllocator};
use crate::engine::grouper::LocationGrouper;

// ==========================================
// RelayPlanner - relay generation engine
// ==========================================
pub struct RelayPlanner {
    grouper: LocationGrouper,
    allocator: TrailerAllocator,
}

impl RelayPlanner {
    pub fn new() -> Self {
        Self {
            grouper: LocationGrouper::new(),
            allocator: TrailerAllocator::new(),
        }
    }

    /// Generate one relay run from a batch of orders.
    ///
    /// Orders are grouped by destination location; each location's
    /// aggregate stack count is partitioned into trailers. Locations
    /// come out in name order and trailers in ascending sequence
    /// number. Load identifiers are drawn from a single monotonic
    /// sequence spanning the whole run.
    #[instrument(skip(self, orders), fields(orders_count = orders.len()))]
    pub fn generate(&self, orders: &[Order]) -> RelaySession {
        let groups = self.grouper.group_by_location(orders);
        let mut load_ids = LoadIdSequence::new();

        let locations: Vec<LocationPlan> = groups
            .into_iter()
            .map(|(name, aggregate)| {
                let trailers = self.allocator.allocate(aggregate.total_stacks, &mut load_ids);
                LocationPlan {
                    name,
                    order_ids: aggregate.orders.iter().map(|o| o.order_id.clone()).collect(),
                    total_trays: aggregate.total_trays,
                    total_stacks: aggregate.total_stacks,
                    trailers,
                }
            })
            .collect();

        let session = RelaySession {
            session_id: format!("RELAY-{}", Uuid::new_v4().simple()),
            generated_at: Utc::now(),
            locations,
        };

        info!(
            locations = session.locations.len(),
            trailers = session.total_trailers(),
            stacks = session.total_stacks(),
            "relay session generated"
        );

        session
    }
}

impl Default for RelayPlanner {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// Tests
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderLine;
    use chrono::NaiveDate;

    // ==========================================
    // Test helpers
    // ==========================================

    fn order_with_stacks(id: &str, location: &str, stacks: u32) -> Order {
        // one synthetic line carrying the whole stack count
        let line = OrderLine {
            product_number: 101,
            product_name: "White Sandwich Loaf".to_string(),
            units_ordered: stacks * 17 * 12,
            units_per_tray: 12,
            trays_needed: stacks * 17,
            stack_height: 17,
            stacks_needed: stacks,
            tray_type: "BREAD".to_string(),
        };
        Order {
            order_id: id.to_string(),
            route_id: 6278,
            location: location.to_string(),
            order_date: NaiveDate::from_ymd_opt(2026, 8, 28).unwrap(),
            day_tag: None,
            items: vec![line.clone()],
            total_trays: line.trays_needed,
            total_stacks: line.stacks_needed,
        }
    }

    #[test]
    fn test_generate_session() {
        let planner = RelayPlanner::new();
        let orders = vec![
            order_with_stacks("ORD-1", "Anderson", 98),
            order_with_stacks("ORD-2", "Anderson", 52),
            order_with_stacks("ORD-3", "Galax", 40),
        ];

        let session = planner.generate(&orders);
        assert_eq!(session.locations.len(), 2);
        assert_eq!(session.total_stacks(), 190);
        assert_eq!(session.total_trailers(), 3);

        let anderson = session.location("Anderson").unwrap();
        assert_eq!(anderson.total_stacks, 150);
        assert_eq!(anderson.order_ids, vec!["ORD-1", "ORD-2"]);
        let loads: Vec<u32> = anderson.trailers.iter().map(|t| t.stacks).collect();
        assert_eq!(loads, vec![98, 52]);

        let galax = session.location("Galax").unwrap();
        assert_eq!(galax.trailers.len(), 1);
        assert_eq!(galax.trailers[0].stacks, 40);
    }

    #[test]
    fn test_load_ids_unique_across_session() {
        let planner = RelayPlanner::new();
        let orders = vec![
            order_with_stacks("ORD-1", "Anderson", 250),
            order_with_stacks("ORD-2", "Galax", 250),
        ];

        let session = planner.generate(&orders);
        let mut ids: Vec<&str> = session
            .locations
            .iter()
            .flat_map(|l| l.trailers.iter())
            .map(|t| t.load_id.as_str())
            .collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_regeneration_is_idempotent_on_loads() {
        let planner = RelayPlanner::new();
        let orders = vec![
            order_with_stacks("ORD-1", "Anderson", 150),
            order_with_stacks("ORD-2", "Galax", 196),
        ];

        let first = planner.generate(&orders);
        let second = planner.generate(&orders);

        let loads = |s: &RelaySession| -> Vec<(String, Vec<u32>)> {
            s.locations
                .iter()
                .map(|l| (l.name.clone(), l.trailers.iter().map(|t| t.stacks).collect()))
                .collect()
        };
        assert_eq!(loads(&first), loads(&second));
    }

    #[test]
    fn test_zero_stack_location_gets_no_trailers() {
        let planner = RelayPlanner::new();
        let orders = vec![order_with_stacks("ORD-1", "Anderson", 0)];

        let session = planner.generate(&orders);
        let anderson = session.location("Anderson").unwrap();
        assert!(anderson.trailers.is_empty());
    }
}
