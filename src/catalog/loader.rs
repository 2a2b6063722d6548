// ==========================================
// Shipping Relay Planner - catalog loader
// ==========================================
// Responsibility: load product and route reference data from flat
// JSON files into an in-memory catalog.
// Input formats:
// - products.json: array of product spec records
// - routes.json:   { "<location>": [route_number, ...], ... }
// Constraint: reference data is validated at load and immutable after.
// ==========================================

use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use crate::catalog::error::{CatalogError, CatalogResult};
use crate::domain::product::{ProductSpec, Route};

// ==========================================
// Catalog - in-memory reference data
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: HashMap<u32, ProductSpec>,
    routes: HashMap<u32, Route>,
}

impl Catalog {
    /// Build a catalog from already-validated records. Fails on
    /// duplicate keys or corrupt product factors.
    pub fn from_records(
        products: Vec<ProductSpec>,
        routes: Vec<Route>,
    ) -> CatalogResult<Self> {
        let mut product_map = HashMap::with_capacity(products.len());
        for spec in products {
            if !spec.has_valid_factors() {
                return Err(CatalogError::InvalidProductSpec {
                    product_number: spec.product_number,
                    message: format!(
                        "units_per_tray={}, stack_height={} (both must be > 0)",
                        spec.units_per_tray, spec.stack_height
                    ),
                });
            }
            if product_map.contains_key(&spec.product_number) {
                return Err(CatalogError::DuplicateProduct(spec.product_number));
            }
            product_map.insert(spec.product_number, spec);
        }

        let mut route_map = HashMap::with_capacity(routes.len());
        for route in routes {
            if route_map.contains_key(&route.route_id) {
                return Err(CatalogError::DuplicateRoute(route.route_id));
            }
            route_map.insert(route.route_id, route);
        }

        Ok(Self {
            products: product_map,
            routes: route_map,
        })
    }

    /// Load products.json and routes.json from disk.
    pub fn load_from_files(
        products_path: &Path,
        routes_path: &Path,
    ) -> CatalogResult<Self> {
        let products: Vec<ProductSpec> = read_json_file(products_path)?;

        // routes.json maps each location to its route numbers
        let routes_by_location: HashMap<String, Vec<u32>> = read_json_file(routes_path)?;
        let routes = routes_by_location
            .into_iter()
            .flat_map(|(location, route_ids)| {
                route_ids.into_iter().map(move |route_id| Route {
                    route_id,
                    location: location.clone(),
                })
            })
            .collect();

        let catalog = Self::from_records(products, routes)?;
        info!(
            products = catalog.products.len(),
            routes = catalog.routes.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    // ==========================================
    // Lookups
    // ==========================================

    pub fn product(&self, product_number: u32) -> Option<&ProductSpec> {
        self.products.get(&product_number)
    }

    pub fn route(&self, route_id: u32) -> Option<&Route> {
        self.routes.get(&route_id)
    }

    pub fn products(&self) -> impl Iterator<Item = &ProductSpec> {
        self.products.values()
    }

    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.values()
    }

    pub fn routes_for_location(&self, location: &str) -> Vec<&Route> {
        self.routes
            .values()
            .filter(|r| r.location == location)
            .collect()
    }

    /// All destination locations, sorted and deduplicated.
    pub fn locations(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .routes
            .values()
            .map(|r| r.location.clone())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }
}

/// Read and deserialize one JSON catalog file.
fn read_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> CatalogResult<T> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound(path.display().to_string()));
    }

    let raw = std::fs::read_to_string(path).map_err(|e| CatalogError::FileReadError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    serde_json::from_str(&raw).map_err(|e| CatalogError::JsonParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

// ==========================================
// Tests
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    fn spec(product_number: u32, units_per_tray: u32, stack_height: u32) -> ProductSpec {
        ProductSpec {
            product_number,
            name: format!("Product {}", product_number),
            units_per_tray,
            stack_height,
            tray_type: "BREAD".to_string(),
            origin_plant: 191,
        }
    }

    #[test]
    fn test_from_records_and_lookups() {
        let catalog = Catalog::from_records(
            vec![spec(101, 12, 17), spec(202, 8, 30)],
            vec![
                Route { route_id: 6278, location: "Anderson".to_string() },
                Route { route_id: 5539, location: "Galax".to_string() },
                Route { route_id: 5540, location: "Galax".to_string() },
            ],
        )
        .unwrap();

        assert_eq!(catalog.product_count(), 2);
        assert_eq!(catalog.route_count(), 3);
        assert_eq!(catalog.product(101).unwrap().units_per_tray, 12);
        assert_eq!(catalog.route(6278).unwrap().location, "Anderson");
        assert_eq!(catalog.routes_for_location("Galax").len(), 2);
        assert_eq!(catalog.locations(), vec!["Anderson", "Galax"]);
        assert!(catalog.product(999).is_none());
    }

    #[test]
    fn test_corrupt_spec_fails_load() {
        let err = Catalog::from_records(vec![spec(101, 0, 17)], vec![]).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidProductSpec { product_number: 101, .. }
        ));
    }

    #[test]
    fn test_duplicate_product_fails_load() {
        let err =
            Catalog::from_records(vec![spec(101, 12, 17), spec(101, 8, 30)], vec![]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateProduct(101)));
    }

    #[test]
    fn test_missing_file() {
        let err = Catalog::load_from_files(
            Path::new("/nonexistent/products.json"),
            Path::new("/nonexistent/routes.json"),
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::FileNotFound(_)));
    }
}
