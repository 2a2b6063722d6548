// ==========================================
// Shipping Relay Planner - product reference data
// ==========================================
// Immutable catalog records: created at catalog load, never mutated.
// Constraint: no order computation may run against a spec with a
// non-positive units_per_tray or stack_height.
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// ProductSpec - product master record
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSpec {
    pub product_number: u32,  // product id (catalog key)
    pub name: String,         // display name
    pub units_per_tray: u32,  // units held by one tray (must be > 0)
    pub stack_height: u32,    // trays per stack (must be > 0)
    pub tray_type: String,    // physical tray type tag
    pub origin_plant: u32,    // producing facility id
}

impl ProductSpec {
    /// Whether the conversion factors of this spec can be trusted.
    ///
    /// A zero `units_per_tray` or `stack_height` is corrupt catalog data:
    /// quantities derived from it would be meaningless, so callers must
    /// refuse to compute rather than divide.
    pub fn has_valid_factors(&self) -> bool {
        self.units_per_tray > 0 && self.stack_height > 0
    }
}

// ==========================================
// Route - delivery route reference data
// ==========================================
// A route belongs to exactly one destination location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub route_id: u32,     // route number (e.g. 6278)
    pub location: String,  // destination location name
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(units_per_tray: u32, stack_height: u32) -> ProductSpec {
        ProductSpec {
            product_number: 101,
            name: "White Sandwich Loaf".to_string(),
            units_per_tray,
            stack_height,
            tray_type: "BREAD".to_string(),
            origin_plant: 191,
        }
    }

    #[test]
    fn test_valid_factors() {
        assert!(spec(12, 17).has_valid_factors());
    }

    #[test]
    fn test_zero_factors_are_invalid() {
        assert!(!spec(0, 17).has_valid_factors());
        assert!(!spec(12, 0).has_valid_factors());
    }
}
