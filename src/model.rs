//! # Order and Catalog Data Model
//!
//! This module defines the read-only documents consumed by the report
//! builders: orders with their line items, and catalog products with their
//! optional recipes. The shapes mirror the JSON documents stored by the
//! ordering application (camelCase fields, `_id` document identifiers).
//!
//! ## Core Concepts
//!
//! - **Order**: one customer transaction with a free-text status and line items
//! - **OrderLineItem**: one product line; its product reference may be stale
//!   or missing, so the display name is always carried as a fallback identity
//! - **Product**: a catalog entry, optionally carrying a recipe
//! - **RecipeIngredient**: raw-material demand for one unit of a product
//!
//! Order quantities arrive from the legacy store as JSON numbers *or* numeric
//! strings; anything else deserializes to `None` and is excluded from
//! aggregation rather than treated as zero demand.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One customer order as stored by the ordering application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Opaque document identifier
    #[serde(alias = "_id")]
    pub id: String,

    /// Free-text status; legacy and Hebrew synonyms are recognized by the
    /// report builders, not normalized here
    pub status: String,

    /// Ordered line items
    #[serde(default)]
    pub items: Vec<OrderLineItem>,

    /// Placement timestamp, carried through for display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// One product line within an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    /// Reference to a catalog product; may be a stale id or free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,

    /// Display name, always present; last-resort identity when the product
    /// reference fails to resolve
    pub name: String,

    /// Count of packages ordered; `None` when the stored value was not numeric
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub quantity: Option<f64>,

    /// Category captured at order time; used only when the resolved product
    /// has no category of its own
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl OrderLineItem {
    /// A line contributes to aggregation only with a positive numeric quantity.
    pub fn effective_quantity(&self) -> Option<f64> {
        match self.quantity {
            Some(q) if q > 0.0 && q.is_finite() => Some(q),
            _ => None,
        }
    }
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(alias = "_id")]
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Raw-material recipe for one unit of this product. Absent or empty
    /// means the product is itself the unit of procurement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<Vec<RecipeIngredient>>,
}

impl Product {
    /// True when the product carries at least one recipe ingredient.
    pub fn has_recipe(&self) -> bool {
        self.recipe.as_ref().is_some_and(|r| !r.is_empty())
    }
}

/// One ingredient required to produce one unit of a product.
///
/// All fields are optional at the wire level; an ingredient missing its
/// name, unit, or category is dropped from aggregation with a warning
/// rather than contributing a zero-identity entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient_quantity")]
    pub quantity: Option<f64>,

    /// Free-text unit, e.g. `kg`, `g`, `bunch`, `piece`, `liter`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// Procurement bucket, e.g. `Fish`, `Vegetables`, `Spices`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Accept a JSON number or a numeric string; anything else becomes `None`.
fn lenient_quantity<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
        Other(serde_json::Value),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Num(n)) => Some(n),
        Some(Raw::Text(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}
