use anyhow::{Context, Result};
use log::info;
use std::env;
use std::path::PathBuf;

use catering_reports::category::ReportConfig;
use catering_reports::snapshot::Snapshot;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    info!("Starting catering report builder");

    let orders_path =
        PathBuf::from(env::var("ORDERS_FILE").unwrap_or_else(|_| "orders.json".to_string()));
    let products_path =
        PathBuf::from(env::var("PRODUCTS_FILE").unwrap_or_else(|_| "products.json".to_string()));
    let safety_margin: f64 = match env::var("SAFETY_MARGIN_PERCENT") {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("SAFETY_MARGIN_PERCENT is not a number: '{raw}'"))?,
        Err(_) => 0.0,
    };

    let snapshot = Snapshot::load_from_files(&orders_path, &products_path)?;
    let config = ReportConfig::default();

    let kitchen = snapshot.kitchen_report(&config);
    println!("Kitchen preparation report ({} lines)", kitchen.len());
    println!("{:-<72}", "");
    let mut current_category = None::<&str>;
    for line in &kitchen {
        if current_category != Some(line.category.as_str()) {
            println!("[{}]", line.category);
            current_category = Some(line.category.as_str());
        }
        println!(
            "  {:<40} x{:<6} {}",
            line.product_name, line.total_packages, line.display_weight
        );
    }

    let shopping = snapshot
        .shopping_list(&config, safety_margin)
        .context("Failed to build shopping list")?;
    println!();
    println!(
        "Shopping list ({} categories, safety margin {}%)",
        shopping.len(),
        safety_margin
    );
    println!("{:-<72}", "");
    for (category, entries) in &shopping {
        println!("[{category}]");
        for entry in entries {
            println!("  {:<40} {:.2} {}", entry.name, entry.total, entry.unit);
        }
    }

    Ok(())
}
