//! # Recipe Explosion
//!
//! Expands a resolved product and an ordered quantity into raw-ingredient
//! demand. A product without a declared recipe is assumed procurable as
//! itself and yields a single piece-unit demand line; it is never silently
//! dropped. Malformed recipe ingredients (missing name, unit, or category)
//! are skipped with a warning and never contribute a zero-identity entry.

use log::{trace, warn};

use crate::category::ReportConfig;
use crate::model::Product;

/// Raw-ingredient demand produced by exploding one order line.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDemand {
    pub name: String,
    pub unit: String,
    pub category: String,
    pub quantity: f64,
}

/// Expand one resolved (or unresolved) product into ingredient demand.
///
/// With no product, or a product whose recipe is absent or empty, the
/// ordered item itself is the unit of procurement: one demand with the
/// piece unit, the no-recipe bucket, and the order quantity. Otherwise
/// each recipe ingredient contributes `order_quantity × ingredient.quantity`
/// carrying its own name, unit, and category through unchanged.
pub fn explode(
    product: Option<&Product>,
    order_quantity: f64,
    fallback_name: &str,
    config: &ReportConfig,
) -> Vec<RecipeDemand> {
    let recipe = product.and_then(|p| p.recipe.as_ref()).filter(|r| !r.is_empty());

    let Some(recipe) = recipe else {
        let name = product
            .map(|p| p.name.clone())
            .unwrap_or_else(|| fallback_name.to_string());
        trace!("No recipe for '{}', treating as piece-unit procurement", name);
        return vec![RecipeDemand {
            name,
            unit: config.piece_unit.clone(),
            category: config.no_recipe_category.clone(),
            quantity: order_quantity,
        }];
    };

    let product_name = product.map(|p| p.name.as_str()).unwrap_or(fallback_name);
    let mut demands = Vec::with_capacity(recipe.len());
    for ingredient in recipe {
        let (Some(name), Some(unit), Some(category)) = (
            ingredient.name.as_deref().filter(|s| !s.trim().is_empty()),
            ingredient.unit.as_deref().filter(|s| !s.trim().is_empty()),
            ingredient
                .category
                .as_deref()
                .filter(|s| !s.trim().is_empty()),
        ) else {
            warn!(
                "Skipping malformed recipe ingredient {:?} of product '{}'",
                ingredient, product_name
            );
            continue;
        };

        let Some(per_unit) = ingredient.quantity.filter(|q| *q > 0.0 && q.is_finite()) else {
            warn!(
                "Skipping recipe ingredient '{}' of product '{}': non-positive quantity {:?}",
                name, product_name, ingredient.quantity
            );
            continue;
        };

        demands.push(RecipeDemand {
            name: name.to_string(),
            unit: unit.to_string(),
            category: category.to_string(),
            quantity: order_quantity * per_unit,
        });
    }
    demands
}
