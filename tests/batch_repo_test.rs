// ==========================================
// Order batch repository integration test
// ==========================================
// Save/load round trip on disk, re-derivation consistency on load,
// and the on-disk field naming contract.
// ==========================================

use chrono::{NaiveDate, Utc};
use relay_planner::catalog::Catalog;
use relay_planner::domain::order::{BatchMetadata, OrderBatch};
use relay_planner::domain::product::{ProductSpec, Route};
use relay_planner::domain::types::DayTag;
use relay_planner::engine::{LineRequest, OrderBuilder};
use relay_planner::repository::{OrderBatchRepository, RepositoryError};
use tempfile::tempdir;

// ==========================================
// Test helpers
// ==========================================

fn test_catalog() -> Catalog {
    Catalog::from_records(
        vec![ProductSpec {
            product_number: 101,
            name: "White Sandwich Loaf".to_string(),
            units_per_tray: 12,
            stack_height: 17,
            tray_type: "BREAD".to_string(),
            origin_plant: 191,
        }],
        vec![Route {
            route_id: 6278,
            location: "Anderson".to_string(),
        }],
    )
    .unwrap()
}

fn build_batch(catalog: &Catalog) -> OrderBatch {
    let builder = OrderBuilder::new(catalog);
    let date = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
    let orders = vec![
        builder
            .create_order(
                6278,
                "Anderson",
                &[LineRequest { product_number: 101, units_ordered: 200 }],
                date,
                Some(4),
            )
            .unwrap()
            .order,
    ];
    let total_orders = orders.len();
    OrderBatch {
        orders,
        metadata: BatchMetadata {
            confirmed_date: date,
            confirmed_day: DayTag::Day4,
            total_orders,
            generated_at: Some(Utc::now()),
        },
    }
}

// ==========================================
// Test 1: round trip preserves every field
// ==========================================
#[test]
fn test_save_load_round_trip() {
    relay_planner::logging::init_test();

    let catalog = test_catalog();
    let batch = build_batch(&catalog);
    let dir = tempdir().unwrap();
    let path = dir.path().join("orders_2026-08-28_Day4.json");

    let repo = OrderBatchRepository::new();
    repo.save(&path, &batch).unwrap();
    let loaded = repo.load(&path).unwrap();

    assert_eq!(loaded.orders.len(), 1);
    assert_eq!(loaded.metadata.confirmed_day, DayTag::Day4);
    assert_eq!(loaded.metadata.total_orders, 1);

    let original = &batch.orders[0];
    let restored = &loaded.orders[0];
    assert_eq!(restored.order_id, original.order_id);
    assert_eq!(restored.route_id, original.route_id);
    assert_eq!(restored.location, original.location);
    assert_eq!(restored.order_date, original.order_date);
    assert_eq!(restored.total_trays, original.total_trays);
    assert_eq!(restored.total_stacks, original.total_stacks);
    assert_eq!(restored.items.len(), original.items.len());
    // 200 units at 12/tray were normalized to 204 before storage
    assert_eq!(restored.items[0].units_ordered, 204);
    assert_eq!(restored.items[0].trays_needed, 17);
    assert_eq!(restored.items[0].stacks_needed, 1);
    assert!(restored.totals_consistent());
}

// ==========================================
// Test 2: tampered derived fields are rejected on load
// ==========================================
#[test]
fn test_load_rejects_inconsistent_batch() {
    let catalog = test_catalog();
    let batch = build_batch(&catalog);
    let dir = tempdir().unwrap();
    let path = dir.path().join("orders.json");

    let repo = OrderBatchRepository::new();
    repo.save(&path, &batch).unwrap();

    // flip one stored derived field on disk
    let raw = std::fs::read_to_string(&path).unwrap();
    let tampered = raw.replace("\"trays_needed\": 17", "\"trays_needed\": 16");
    assert_ne!(raw, tampered);
    std::fs::write(&path, tampered).unwrap();

    let err = repo.load(&path).unwrap_err();
    assert!(matches!(err, RepositoryError::ConsistencyViolation { .. }));
}

// ==========================================
// Test 3: on-disk field naming contract
// ==========================================
#[test]
fn test_serialized_shape_field_names() {
    let catalog = test_catalog();
    let batch = build_batch(&catalog);

    let json = serde_json::to_value(&batch).unwrap();
    let order = &json["orders"][0];
    for key in ["order_id", "route_id", "location", "order_date", "total_trays", "total_stacks"] {
        assert!(order.get(key).is_some(), "missing order field: {}", key);
    }
    let item = &order["items"][0];
    for key in [
        "product_number",
        "product_name",
        "units_ordered",
        "units_per_tray",
        "trays_needed",
        "stack_height",
        "stacks_needed",
        "tray_type",
    ] {
        assert!(item.get(key).is_some(), "missing item field: {}", key);
    }
    let metadata = &json["metadata"];
    for key in ["confirmed_date", "confirmed_day", "total_orders"] {
        assert!(metadata.get(key).is_some(), "missing metadata field: {}", key);
    }
    assert_eq!(metadata["confirmed_day"], 4);
}

// ==========================================
// Test 4: a hand-written batch file in the documented shape loads
// ==========================================
#[test]
fn test_loads_external_batch_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("orders.json");
    std::fs::write(
        &path,
        r#"{
  "orders": [
    {
      "order_id": "ORD-D4-abc123",
      "route_id": 6278,
      "location": "Anderson",
      "order_date": "2026-08-28",
      "total_trays": 17,
      "total_stacks": 1,
      "items": [
        {
          "product_number": 101,
          "product_name": "White Sandwich Loaf",
          "units_ordered": 204,
          "units_per_tray": 12,
          "trays_needed": 17,
          "stack_height": 17,
          "stacks_needed": 1,
          "tray_type": "BREAD"
        }
      ]
    }
  ],
  "metadata": {
    "confirmed_date": "2026-08-28",
    "confirmed_day": 4,
    "total_orders": 1
  }
}"#,
    )
    .unwrap();

    let batch = OrderBatchRepository::new().load(&path).unwrap();
    assert_eq!(batch.orders[0].location, "Anderson");
    assert_eq!(batch.metadata.confirmed_day, DayTag::Day4);
    assert!(batch.metadata.generated_at.is_none());
}

// ==========================================
// Test 5: missing file is a distinct error
// ==========================================
#[test]
fn test_missing_file() {
    let err = OrderBatchRepository::new()
        .load(std::path::Path::new("/nonexistent/orders.json"))
        .unwrap_err();
    assert!(matches!(err, RepositoryError::FileNotFound(_)));
}
