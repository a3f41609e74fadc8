//! # Report Data Snapshot
//!
//! Each report build is a single logical read over two read-only sources:
//! the orders collection and the product catalog. Both are fetched once,
//! up front, and held immutable for the remainder of the computation. The
//! builders never re-fetch mid-aggregation, so a report is consistent with
//! itself even while the underlying store is being written elsewhere.
//!
//! The builders are pure functions of a `Snapshot`; concurrent report
//! requests over separate snapshots are independent and lock-free.

use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::Path;

use crate::catalog::ProductCatalog;
use crate::category::ReportConfig;
use crate::kitchen_report::{build_kitchen_report, KitchenReportLine};
use crate::model::{Order, Product};
use crate::report_errors::ReportError;
use crate::shopping_list::{build_shopping_list, ShoppingList};

/// Immutable order + catalog snapshot backing one or more report builds.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub orders: Vec<Order>,
    pub catalog: ProductCatalog,
}

impl Snapshot {
    pub fn new(orders: Vec<Order>, products: Vec<Product>) -> Self {
        Self {
            orders,
            catalog: ProductCatalog::new(products),
        }
    }

    /// Load a snapshot from JSON document arrays on disk.
    pub fn load_from_files(orders_path: &Path, products_path: &Path) -> Result<Self> {
        info!(
            "Loading snapshot: orders from {}, products from {}",
            orders_path.display(),
            products_path.display()
        );

        let orders_raw = fs::read_to_string(orders_path)
            .with_context(|| format!("Failed to read orders from {}", orders_path.display()))?;
        let orders: Vec<Order> = serde_json::from_str(&orders_raw)
            .with_context(|| format!("Failed to parse orders from {}", orders_path.display()))?;

        let products_raw = fs::read_to_string(products_path)
            .with_context(|| format!("Failed to read products from {}", products_path.display()))?;
        let products: Vec<Product> = serde_json::from_str(&products_raw)
            .with_context(|| format!("Failed to parse products from {}", products_path.display()))?;

        info!(
            "Snapshot loaded: {} orders, {} products",
            orders.len(),
            products.len()
        );
        Ok(Self::new(orders, products))
    }

    /// Build the kitchen preparation report over this snapshot.
    pub fn kitchen_report(&self, config: &ReportConfig) -> Vec<KitchenReportLine> {
        build_kitchen_report(&self.orders, &self.catalog, config)
    }

    /// Build the procurement shopping list over this snapshot.
    pub fn shopping_list(
        &self,
        config: &ReportConfig,
        safety_margin_percent: f64,
    ) -> Result<ShoppingList, ReportError> {
        build_shopping_list(&self.orders, &self.catalog, config, safety_margin_percent)
    }
}
