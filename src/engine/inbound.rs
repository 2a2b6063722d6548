// ==========================================
// Shipping Relay Planner - inbound demand analyzer
// ==========================================
// Responsibility: identify products in a batch that originate at other
// facilities and must be trucked in before the relay can ship.
// Input: orders + catalog
// Output: per-origin-facility demand totals
// ==========================================

use std::collections::BTreeMap;

use tracing::instrument;

use crate::catalog::Catalog;
use crate::domain::order::Order;

/// Aggregate demand for one inbound product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundDemand {
    pub product_number: u32,
    pub product_name: String,
    pub origin_plant: u32,
    pub total_units: u32,
    pub total_trays: u32,
    pub total_stacks: u32,
}

// ==========================================
// InboundAnalyzer - origin-facility rollup
// ==========================================
pub struct InboundAnalyzer {
    home_plant: u32,
}

impl InboundAnalyzer {
    pub fn new(home_plant: u32) -> Self {
        Self { home_plant }
    }

    /// Sum ordered units/trays/stacks per product for every origin
    /// facility other than the home facility, keyed by origin.
    ///
    /// Lines whose product is no longer in the catalog are ignored;
    /// the order snapshot carries no origin facility, so an unresolvable
    /// product cannot be attributed to one.
    #[instrument(skip(self, orders, catalog), fields(home_plant = self.home_plant))]
    pub fn analyze(
        &self,
        orders: &[Order],
        catalog: &Catalog,
    ) -> BTreeMap<u32, Vec<InboundDemand>> {
        let mut by_plant: BTreeMap<u32, BTreeMap<u32, InboundDemand>> = BTreeMap::new();

        for order in orders {
            for line in &order.items {
                let Some(spec) = catalog.product(line.product_number) else {
                    continue;
                };
                if spec.origin_plant == self.home_plant {
                    continue;
                }

                let entry = by_plant
                    .entry(spec.origin_plant)
                    .or_default()
                    .entry(line.product_number)
                    .or_insert_with(|| InboundDemand {
                        product_number: line.product_number,
                        product_name: line.product_name.clone(),
                        origin_plant: spec.origin_plant,
                        total_units: 0,
                        total_trays: 0,
                        total_stacks: 0,
                    });
                entry.total_units += line.units_ordered;
                entry.total_trays += line.trays_needed;
                entry.total_stacks += line.stacks_needed;
            }
        }

        by_plant
            .into_iter()
            .map(|(plant, products)| (plant, products.into_values().collect()))
            .collect()
    }
}
