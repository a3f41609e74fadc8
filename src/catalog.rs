//! # Product Catalog and Resolution
//!
//! An immutable index over the product catalog snapshot, with the two-step
//! resolution used by both report builders: a direct lookup when the order
//! line carries a syntactically valid document id, then an exact-name
//! lookup as a fallback for free-text or stale references.
//!
//! A total miss is a defined outcome (`None`), never an error: every caller
//! has an explicit no-product branch, and a resolver miss must never abort
//! a whole report.

use log::{debug, trace};
use std::collections::HashMap;

use crate::model::Product;
use crate::weight_patterns::DOCUMENT_ID_REGEX;

/// Read-only product index, built once per report from the snapshot.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: Vec<Product>,
    by_id: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl ProductCatalog {
    /// Build the id and name indexes. On duplicate names the first catalog
    /// entry wins, matching the store's find-one semantics.
    pub fn new(products: Vec<Product>) -> Self {
        let mut by_id = HashMap::with_capacity(products.len());
        let mut by_name = HashMap::with_capacity(products.len());
        for (index, product) in products.iter().enumerate() {
            by_id.entry(product.id.clone()).or_insert(index);
            by_name.entry(product.name.clone()).or_insert(index);
        }
        debug!("Indexed {} catalog products", products.len());
        Self {
            products,
            by_id,
            by_name,
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Locate the authoritative product record for an order line.
    ///
    /// A syntactically valid document id (24 hex characters) is looked up
    /// directly; otherwise, or when the id lookup misses, an exact-name
    /// match is attempted. Returns `None` on a total miss.
    pub fn resolve(&self, product_ref: Option<&str>, name: &str) -> Option<&Product> {
        if let Some(id) = product_ref {
            if DOCUMENT_ID_REGEX.is_match(id) {
                if let Some(&index) = self.by_id.get(id) {
                    trace!("Resolved product by id '{}'", id);
                    return Some(&self.products[index]);
                }
                debug!("Product id '{}' not in catalog, falling back to name", id);
            } else {
                trace!("Product ref '{}' is not a document id, using name", id);
            }
        }

        match self.by_name.get(name) {
            Some(&index) => {
                trace!("Resolved product by name '{}'", name);
                Some(&self.products[index])
            }
            None => {
                debug!("No catalog product matches '{}'", name);
                None
            }
        }
    }
}
