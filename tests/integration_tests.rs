//! End-to-end tests driving both report builders through the public
//! snapshot API, from raw JSON documents to sorted report output.

use catering_reports::category::ReportConfig;
use catering_reports::model::{Order, Product};
use catering_reports::snapshot::Snapshot;
use catering_reports::weight::WeightUnit;

fn snapshot_from_json(orders: &str, products: &str) -> Snapshot {
    let orders: Vec<Order> = serde_json::from_str(orders).unwrap();
    let products: Vec<Product> = serde_json::from_str(products).unwrap();
    Snapshot::new(orders, products)
}

#[test]
fn scenario_a_uncatalogued_weighed_salad() {
    // One active order, one line with an embedded weight and no catalog
    // match: the kitchen report still carries it, weighted from the name.
    let snapshot = snapshot_from_json(
        r#"[{
            "_id": "64b1f0a2c9e77a0012340001",
            "status": "new",
            "items": [{"name": "סלט חומוס 500 גרם", "quantity": 3, "category": "סלטים"}]
        }]"#,
        "[]",
    );
    let config = ReportConfig::default();

    let report = snapshot.kitchen_report(&config);
    assert_eq!(report.len(), 1);
    let line = &report[0];
    assert_eq!(line.product_name, "סלט חומוס 500 גרם");
    assert_eq!(line.category, "סלטים");
    assert_eq!(line.total_packages, 3.0);
    assert_eq!(line.total_weight_raw, 1500.0);
    assert_eq!(line.display_weight, "1.50 kg");
    assert_eq!(line.unit, Some(WeightUnit::Grams));
    assert!(!line.is_unit_only);
}

#[test]
fn scenario_b_recipe_explosion_into_procurement() {
    let snapshot = snapshot_from_json(
        r#"[{
            "_id": "64b1f0a2c9e77a0012340001",
            "status": "new",
            "items": [{"productId": "64b1f0a2c9e77a0012345678", "name": "לחם", "quantity": 4}]
        }]"#,
        r#"[{
            "_id": "64b1f0a2c9e77a0012345678",
            "name": "לחם",
            "category": "מאפים",
            "recipe": [{"name": "קמח", "quantity": 0.5, "unit": "kg", "category": "Dry Goods"}]
        }]"#,
    );
    let config = ReportConfig::default();

    let list = snapshot.shopping_list(&config, 0.0).unwrap();
    let dry_goods = &list["Dry Goods"];
    assert_eq!(dry_goods.len(), 1);
    assert_eq!(dry_goods[0].name, "קמח");
    assert_eq!(dry_goods[0].total, 2.0);
    assert_eq!(dry_goods[0].unit, "kg");
}

#[test]
fn scenario_c_safety_margin_applied_once() {
    let snapshot = snapshot_from_json(
        r#"[{
            "_id": "64b1f0a2c9e77a0012340001",
            "status": "new",
            "items": [{"productId": "64b1f0a2c9e77a0012345678", "name": "לחם", "quantity": 4}]
        }]"#,
        r#"[{
            "_id": "64b1f0a2c9e77a0012345678",
            "name": "לחם",
            "recipe": [{"name": "קמח", "quantity": 0.5, "unit": "kg", "category": "Dry Goods"}]
        }]"#,
    );
    let config = ReportConfig::default();

    let list = snapshot.shopping_list(&config, 10.0).unwrap();
    assert!((list["Dry Goods"][0].total - 2.2).abs() < 1e-9);
}

#[test]
fn safety_margin_scaling_law_holds_per_entry() {
    let snapshot = snapshot_from_json(
        r#"[
            {
                "_id": "64b1f0a2c9e77a0012340001",
                "status": "new",
                "items": [
                    {"productId": "64b1f0a2c9e77a0012345678", "name": "לחם", "quantity": 3},
                    {"name": "מארז אירוח", "quantity": 2}
                ]
            },
            {
                "_id": "64b1f0a2c9e77a0012340002",
                "status": "delivered",
                "items": [{"productId": "64b1f0a2c9e77a0012345678", "name": "לחם", "quantity": 1}]
            }
        ]"#,
        r#"[{
            "_id": "64b1f0a2c9e77a0012345678",
            "name": "לחם",
            "recipe": [
                {"name": "קמח", "quantity": 0.5, "unit": "kg", "category": "Dry Goods"},
                {"name": "שמרים", "quantity": 10, "unit": "g", "category": "Dry Goods"}
            ]
        }]"#,
    );
    let config = ReportConfig::default();

    for margin in [0.0, 7.5, 25.0, 100.0] {
        let baseline = snapshot.shopping_list(&config, 0.0).unwrap();
        let scaled = snapshot.shopping_list(&config, margin).unwrap();
        assert_eq!(
            baseline.keys().collect::<Vec<_>>(),
            scaled.keys().collect::<Vec<_>>()
        );
        for (category, entries) in &baseline {
            for (base, inflated) in entries.iter().zip(&scaled[category]) {
                assert_eq!(base.name, inflated.name);
                assert_eq!(base.unit, inflated.unit);
                let expected = base.total * (1.0 + margin / 100.0);
                assert!(
                    (inflated.total - expected).abs() < 1e-9,
                    "margin {margin}% broke scaling for '{}'",
                    base.name
                );
            }
        }
    }
}

#[test]
fn reports_are_idempotent_over_a_snapshot() {
    let snapshot = snapshot_from_json(
        r#"[
            {
                "_id": "64b1f0a2c9e77a0012340001",
                "status": "new",
                "items": [
                    {"name": "סלט חומוס 500 גרם", "quantity": 3, "category": "סלטים"},
                    {"name": "שניצל עוף", "quantity": 12, "category": "מנות עיקריות"},
                    {"productId": "64b1f0a2c9e77a0012345678", "name": "לחם", "quantity": 4}
                ]
            },
            {
                "_id": "64b1f0a2c9e77a0012340002",
                "status": "בטיפול",
                "items": [{"name": "עוגת שוקולד", "quantity": 1, "category": "קינוחים"}]
            }
        ]"#,
        r#"[{
            "_id": "64b1f0a2c9e77a0012345678",
            "name": "לחם",
            "category": "מאפים",
            "recipe": [{"name": "קמח", "quantity": 0.5, "unit": "kg", "category": "Dry Goods"}]
        }]"#,
    );
    let config = ReportConfig::default();

    let kitchen_first = serde_json::to_string(&snapshot.kitchen_report(&config)).unwrap();
    let kitchen_second = serde_json::to_string(&snapshot.kitchen_report(&config)).unwrap();
    assert_eq!(kitchen_first, kitchen_second);

    let list_first =
        serde_json::to_string(&snapshot.shopping_list(&config, 15.0).unwrap()).unwrap();
    let list_second =
        serde_json::to_string(&snapshot.shopping_list(&config, 15.0).unwrap()).unwrap();
    assert_eq!(list_first, list_second);
}

#[test]
fn unresolvable_product_reports_in_both_outputs() {
    let snapshot = snapshot_from_json(
        r#"[{
            "_id": "64b1f0a2c9e77a0012340001",
            "status": "new",
            "items": [{"productId": "ffffffffffffffffffffffff", "name": "מגש פירות", "quantity": 2}]
        }]"#,
        "[]",
    );
    let config = ReportConfig::default();

    let kitchen = snapshot.kitchen_report(&config);
    assert_eq!(kitchen.len(), 1);
    assert_eq!(kitchen[0].product_name, "מגש פירות");
    assert_eq!(kitchen[0].category, "תוספות");

    let list = snapshot.shopping_list(&config, 0.0).unwrap();
    let all_entries: usize = list.values().map(|v| v.len()).sum();
    assert_eq!(all_entries, 1);
    assert_eq!(list["General"][0].name, "מגש פירות");
}

#[test]
fn status_sets_differ_between_reports() {
    // Delivered orders are out of the kitchen report but in procurement;
    // cancelled orders are in neither.
    let snapshot = snapshot_from_json(
        r#"[
            {
                "_id": "64b1f0a2c9e77a0012340001",
                "status": "delivered",
                "items": [{"name": "לחמניות", "quantity": 6}]
            },
            {
                "_id": "64b1f0a2c9e77a0012340002",
                "status": "cancelled",
                "items": [{"name": "לחמניות", "quantity": 60}]
            }
        ]"#,
        "[]",
    );
    let config = ReportConfig::default();

    assert!(snapshot.kitchen_report(&config).is_empty());

    let list = snapshot.shopping_list(&config, 0.0).unwrap();
    assert_eq!(list["General"][0].total, 6.0);
}

#[test]
fn no_recipe_product_procured_as_piece() {
    let snapshot = snapshot_from_json(
        r#"[{
            "_id": "64b1f0a2c9e77a0012340001",
            "status": "ready",
            "items": [{"productId": "64b1f0a2c9e77a0012345678", "name": "קישים", "quantity": 5}]
        }]"#,
        r#"[{
            "_id": "64b1f0a2c9e77a0012345678",
            "name": "קיש בטטה",
            "category": "מאפים",
            "recipe": []
        }]"#,
    );
    let config = ReportConfig::default();

    let list = snapshot.shopping_list(&config, 0.0).unwrap();
    let bucket = &list["כללי / מוצרים ללא מתכון"];
    assert_eq!(bucket.len(), 1);
    assert_eq!(bucket[0].name, "קיש בטטה");
    assert_eq!(bucket[0].unit, "יחידות");
    assert_eq!(bucket[0].total, 5.0);
}

#[test]
fn legacy_quantity_strings_are_accepted() {
    let snapshot = snapshot_from_json(
        r#"[{
            "_id": "64b1f0a2c9e77a0012340001",
            "status": "new",
            "items": [
                {"name": "לחמניות", "quantity": "6"},
                {"name": "פיתות", "quantity": "לא ידוע"}
            ]
        }]"#,
        "[]",
    );
    let config = ReportConfig::default();

    let kitchen = snapshot.kitchen_report(&config);
    assert_eq!(kitchen.len(), 1);
    assert_eq!(kitchen[0].product_name, "לחמניות");
    assert_eq!(kitchen[0].total_packages, 6.0);
}
