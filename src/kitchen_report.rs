//! # Kitchen Preparation Report
//!
//! Folds the active-order snapshot into per-product preparation lines:
//! how many packages to prepare, and for weighed categories the total raw
//! weight derived from the weight token embedded in the product name.
//!
//! Grouping is keyed by `(category, productName)`, so the same product
//! name appearing under two resolved categories yields two lines; category
//! resolution deliberately happens before grouping. Output ordering is
//! fixed: the configured category priority first, unrecognized categories
//! after it alphabetically, product names alphabetically within a category.

use log::{debug, info, warn};
use serde::Serialize;
use std::collections::HashMap;

use crate::catalog::ProductCatalog;
use crate::category::{resolve_category, ReportConfig};
use crate::model::Order;
use crate::weight::{extract_weight, format_weight, WeightUnit};

/// One pre-sorted line of the kitchen report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KitchenReportLine {
    pub product_name: String,
    pub category: String,
    pub total_packages: f64,
    /// Aggregated weight in base units (grams / milliliters); zero for
    /// unit-only categories and for products with no embedded weight
    pub total_weight_raw: f64,
    /// Human display string, `"-"` when no weight applies
    pub display_weight: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<WeightUnit>,
    pub is_unit_only: bool,
}

/// Build the kitchen preparation report from an order snapshot.
///
/// Orders outside the kitchen-active status set are ignored; lines with a
/// non-positive or non-numeric quantity are excluded. A line whose product
/// cannot be resolved still reports under its own name and order-time
/// category (or the sides fallback) rather than being dropped.
pub fn build_kitchen_report(
    orders: &[Order],
    catalog: &ProductCatalog,
    config: &ReportConfig,
) -> Vec<KitchenReportLine> {
    info!(
        "Building kitchen report over {} orders, {} catalog products",
        orders.len(),
        catalog.len()
    );

    // (category, product name) -> summed packages
    let mut groups: HashMap<(String, String), f64> = HashMap::new();

    for order in orders {
        if !config.is_kitchen_active(&order.status) {
            debug!("Order {} skipped: status '{}'", order.id, order.status);
            continue;
        }
        for item in &order.items {
            let Some(quantity) = item.effective_quantity() else {
                warn!(
                    "Order {} line '{}' excluded: invalid quantity {:?}",
                    order.id, item.name, item.quantity
                );
                continue;
            };

            let product = catalog.resolve(item.product_id.as_deref(), &item.name);
            if product.is_none() {
                warn!(
                    "Order {} line '{}': no product details, reporting from order line",
                    order.id, item.name
                );
            }

            let category = resolve_category(
                product,
                item,
                false,
                &config.kitchen_fallback_category,
                config,
            );
            let product_name = product
                .map(|p| p.name.clone())
                .unwrap_or_else(|| item.name.clone());

            *groups.entry((category, product_name)).or_insert(0.0) += quantity;
        }
    }

    let mut lines: Vec<KitchenReportLine> = groups
        .into_iter()
        .map(|((category, product_name), total_packages)| {
            if config.is_unit_only(&category) {
                return KitchenReportLine {
                    product_name,
                    category,
                    total_packages,
                    total_weight_raw: 0.0,
                    display_weight: "-".to_string(),
                    unit: None,
                    is_unit_only: true,
                };
            }

            // One extraction per group, scaled by the package count
            let embedded = extract_weight(&product_name);
            let total_weight_raw = embedded.value * total_packages;
            KitchenReportLine {
                display_weight: format_weight(total_weight_raw, embedded.unit),
                product_name,
                category,
                total_packages,
                total_weight_raw,
                unit: embedded.unit,
                is_unit_only: false,
            }
        })
        .collect();

    lines.sort_by(|a, b| {
        config
            .priority_rank(&a.category)
            .cmp(&config.priority_rank(&b.category))
            .then_with(|| a.category.cmp(&b.category))
            .then_with(|| a.product_name.cmp(&b.product_name))
    });

    info!("Kitchen report built: {} lines", lines.len());
    lines
}
