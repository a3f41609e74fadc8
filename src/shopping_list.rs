//! # Procurement Shopping List
//!
//! Folds the non-cancelled order snapshot through recipe explosion into
//! per-ingredient aggregate demand, bucketed by procurement category.
//!
//! The aggregation key is the full `(name, unit, category)` tuple: two
//! ingredients sharing a name but differing in unit or category are
//! distinct buckets and are never merged. An optional safety margin is
//! applied once over the completed aggregation, never per line, so
//! rounding drift cannot compound.
//!
//! The status filter here is broader than the kitchen report's on purpose:
//! every non-cancelled order participates, including ready and delivered
//! ones, since unbought stock for delivered orders still needs restocking
//! bookkeeping.

use log::{debug, info, warn};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::catalog::ProductCatalog;
use crate::category::{resolve_category, ReportConfig};
use crate::model::Order;
use crate::recipe::{explode, RecipeDemand};
use crate::report_errors::ReportError;

/// One aggregated procurement entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedIngredient {
    pub name: String,
    pub total: f64,
    pub unit: String,
    pub category: String,
}

/// Category name to name-sorted ingredient demands.
pub type ShoppingList = BTreeMap<String, Vec<AggregatedIngredient>>;

/// Build the procurement shopping list from an order snapshot.
///
/// `safety_margin_percent` uniformly inflates every aggregated quantity by
/// `1 + pct/100`; zero is the margin-free baseline. A negative or
/// non-finite margin is a build failure, not a silent clamp.
pub fn build_shopping_list(
    orders: &[Order],
    catalog: &ProductCatalog,
    config: &ReportConfig,
    safety_margin_percent: f64,
) -> Result<ShoppingList, ReportError> {
    if !(safety_margin_percent >= 0.0 && safety_margin_percent.is_finite()) {
        return Err(ReportError::Build(format!(
            "safety margin must be a non-negative percentage, got {safety_margin_percent}"
        )));
    }

    info!(
        "Building shopping list over {} orders, margin {}%",
        orders.len(),
        safety_margin_percent
    );

    // (name, unit, category) -> summed demand
    let mut totals: HashMap<(String, String, String), f64> = HashMap::new();

    for order in orders {
        if !config.is_procurement_active(&order.status) {
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

            let demands = match catalog.resolve(item.product_id.as_deref(), &item.name) {
                Some(product) => explode(Some(product), quantity, &item.name, config),
                None => {
                    // No catalog match at all: the raw line itself is the
                    // unit of procurement, classified by name as a last resort
                    let category = resolve_category(
                        None,
                        item,
                        true,
                        &config.procurement_fallback_category,
                        config,
                    );
                    debug!(
                        "Order {} line '{}' unresolved, bucketed under '{}'",
                        order.id, item.name, category
                    );
                    vec![RecipeDemand {
                        name: item.name.clone(),
                        unit: config.piece_unit.clone(),
                        category,
                        quantity,
                    }]
                }
            };

            for demand in demands {
                *totals
                    .entry((demand.name, demand.unit, demand.category))
                    .or_insert(0.0) += demand.quantity;
            }
        }
    }

    // Final uniform pass over the completed aggregation
    if safety_margin_percent > 0.0 {
        let factor = 1.0 + safety_margin_percent / 100.0;
        for total in totals.values_mut() {
            *total *= factor;
        }
    }

    let mut list = ShoppingList::new();
    for ((name, unit, category), total) in totals {
        list.entry(category.clone())
            .or_default()
            .push(AggregatedIngredient {
                name,
                total,
                unit,
                category,
            });
    }
    for entries in list.values_mut() {
        entries.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.unit.cmp(&b.unit)));
    }

    info!("Shopping list built: {} categories", list.len());
    Ok(list)
}
