//! # Catering Report Engine
//!
//! Aggregation engine for a catering business: folds a read-only snapshot
//! of active orders and the product catalog into two on-demand reports:
//! a kitchen preparation report (packages to prepare, total raw weight)
//! and a procurement shopping list (raw ingredients to buy, by recipe
//! explosion, with an optional safety margin).

pub mod catalog;
pub mod category;
pub mod kitchen_report;
pub mod model;
pub mod recipe;
pub mod report_errors;
pub mod shopping_list;
pub mod snapshot;
pub mod weight;
pub mod weight_patterns;
