//! # Category Configuration and Classification
//!
//! This module holds the business constants that drive both reports
//! (active-status sets, unit-only categories, the category sort priority,
//! fallback bucket names) and the category resolution fallback chain.
//!
//! The constants are business-tuned values reproduced verbatim from the
//! ordering application; they are carried on a `ReportConfig` value passed
//! explicitly into every builder call rather than read as ambient globals,
//! so tests can substitute their own priority lists.
//!
//! Category resolution is a first-match-wins chain:
//!
//! 1. the resolved product's own category
//! 2. the category captured on the order line
//! 3. a name-keyword heuristic (procurement path only, when no product
//!    resolves at all)
//! 4. the caller's default bucket
//!
//! Each rule runs only if the previous one yielded nothing. The ordering
//! is part of the output contract and must not be rearranged.

use std::collections::HashSet;

use crate::model::{OrderLineItem, Product};
use crate::weight::extract_weight;

/// One name-keyword rule: if the line name contains any of the keywords
/// (case-insensitively), the item maps to `category`.
#[derive(Debug, Clone)]
pub struct KeywordRule {
    pub keywords: Vec<String>,
    pub category: String,
}

/// Business constants consumed by the report builders.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Statuses included in the kitchen preparation report
    pub kitchen_active_statuses: HashSet<String>,
    /// Status excluded from the procurement list; everything else is in
    pub cancelled_status: String,
    /// Categories reported by packaging count alone, with no weight column
    pub unit_only_categories: HashSet<String>,
    /// Kitchen report category ordering; unlisted categories sort after,
    /// alphabetically among themselves
    pub category_priority: Vec<String>,
    /// Kitchen report bucket for items with no resolvable category
    pub kitchen_fallback_category: String,
    /// Procurement bucket for order lines whose product never resolves
    pub procurement_fallback_category: String,
    /// Procurement bucket for resolved products without a recipe
    pub no_recipe_category: String,
    /// Unit label for products procured as themselves
    pub piece_unit: String,
    /// Name-keyword rules tried, in order, by the procurement heuristic
    pub keyword_rules: Vec<KeywordRule>,
    /// Bucket for items whose name embeds a weight token (prepared salads)
    pub weighed_item_category: String,
}

fn string_set(values: &[&str]) -> HashSet<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn string_vec(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            kitchen_active_statuses: string_set(&[
                "new",
                "New",
                "in-progress",
                "ready",
                "accepted",
                "processing",
                "בטיפול",
                "חדש",
            ]),
            cancelled_status: "cancelled".to_string(),
            unit_only_categories: string_set(&[
                "דגים",
                "Fish",
                "מנות עיקריות",
                "Main Courses",
            ]),
            category_priority: string_vec(&["מנות עיקריות", "סלטים", "דגים", "קינוחים"]),
            kitchen_fallback_category: "תוספות".to_string(),
            procurement_fallback_category: "General".to_string(),
            no_recipe_category: "כללי / מוצרים ללא מתכון".to_string(),
            piece_unit: "יחידות".to_string(),
            keyword_rules: vec![
                KeywordRule {
                    keywords: string_vec(&["סלט", "חמוצים", "מטבוחה", "salad"]),
                    category: "סלטים".to_string(),
                },
                KeywordRule {
                    keywords: string_vec(&["דג", "סלמון", "טונה", "fish", "salmon"]),
                    category: "דגים".to_string(),
                },
                KeywordRule {
                    keywords: string_vec(&[
                        "עוף", "בשר", "שניצל", "קציצות", "צלי", "chicken", "beef", "meat",
                    ]),
                    category: "מנות עיקריות".to_string(),
                },
                KeywordRule {
                    keywords: string_vec(&["עוגה", "קינוח", "מוס", "מלבי", "cake", "dessert"]),
                    category: "קינוחים".to_string(),
                },
            ],
            weighed_item_category: "סלטים".to_string(),
        }
    }
}

impl ReportConfig {
    /// Whether an order participates in the kitchen report.
    pub fn is_kitchen_active(&self, status: &str) -> bool {
        self.kitchen_active_statuses.contains(status)
    }

    /// Whether an order participates in the procurement list.
    pub fn is_procurement_active(&self, status: &str) -> bool {
        status != self.cancelled_status
    }

    /// Whether a category is reported by packaging count alone.
    pub fn is_unit_only(&self, category: &str) -> bool {
        self.unit_only_categories.contains(category)
    }

    /// Sort rank of a category in the kitchen report. Categories on the
    /// priority list rank by position; everything else ranks after.
    pub fn priority_rank(&self, category: &str) -> usize {
        self.category_priority
            .iter()
            .position(|c| c == category)
            .unwrap_or(self.category_priority.len())
    }
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

/// Name-keyword heuristic: map a raw order-line name to a category bucket.
///
/// Keyword rules are tried in configuration order; a name that embeds a
/// weight token but matches no keyword is treated as a prepared-salad item.
/// Returns `None` when nothing applies.
pub fn classify_by_name(name: &str, config: &ReportConfig) -> Option<String> {
    let lowered = name.to_lowercase();
    for rule in &config.keyword_rules {
        if rule
            .keywords
            .iter()
            .any(|keyword| lowered.contains(&keyword.to_lowercase()))
        {
            return Some(rule.category.clone());
        }
    }
    if extract_weight(name).unit.is_some() {
        return Some(config.weighed_item_category.clone());
    }
    None
}

/// Resolve the display category for an order line.
///
/// `use_name_heuristic` enables step 3 of the chain; only the procurement
/// builder sets it, and only for lines whose product never resolved.
pub fn resolve_category(
    product: Option<&Product>,
    item: &OrderLineItem,
    use_name_heuristic: bool,
    default_bucket: &str,
    config: &ReportConfig,
) -> String {
    non_empty(product.and_then(|p| p.category.as_ref()))
        .or_else(|| non_empty(item.category.as_ref()))
        .or_else(|| {
            if use_name_heuristic {
                classify_by_name(&item.name, config)
            } else {
                None
            }
        })
        .unwrap_or_else(|| default_bucket.to_string())
}
