//! # Seed Data Generator
//!
//! Populates a database with a small demo shop for development.
//!
//! ## Usage
//! ```bash
//! cargo run -p stockbook-db --bin seed
//!
//! # Specify database path
//! cargo run -p stockbook-db --bin seed -- --db ./data/demo.db
//! ```
//!
//! The data is deterministic: every run against an empty database produces
//! the same catalog and ledger.

use std::env;

use stockbook_core::Product;
use stockbook_db::{Database, DbConfig};

/// Demo catalog: (product_id, name, list price)
const CATALOG: &[(&str, &str, f64)] = &[
    ("TEA-01", "Green Tea", 4.5),
    ("TEA-02", "Black Tea", 3.9),
    ("CUP-01", "Ceramic Mug", 12.0),
    ("POT-01", "Teapot", 29.0),
    ("HNY-01", "Wildflower Honey", 8.75),
    ("BIS-01", "Shortbread", 5.25),
];

/// Purchases: (product_id, quantity, unit cost)
const PURCHASES: &[(&str, i64, f64)] = &[
    ("TEA-01", 40, 2.1),
    ("TEA-02", 40, 1.8),
    ("CUP-01", 12, 6.5),
    ("POT-01", 4, 15.0),
    ("HNY-01", 20, 4.4),
    ("BIS-01", 30, 2.6),
    ("TEA-01", 20, 2.3),
];

/// Orders: (product_id, quantity)
const ORDERS: &[(&str, i64)] = &[
    ("TEA-01", 6),
    ("TEA-02", 3),
    ("TEA-01", 10),
    ("CUP-01", 2),
    ("BIS-01", 8),
    ("TEA-01", 4),
    ("POT-01", 3),
    ("HNY-01", 5),
    ("CUP-01", 1),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./stockbook_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Stockbook Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./stockbook_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Stockbook Seed Data Generator");
    println!("===============================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicate transactions.");
        println!("  Delete the database file to regenerate.");
        db.close().await;
        return Ok(());
    }

    for (id, name, price) in CATALOG {
        db.products().save(&Product::new(*id, *name, *price)).await?;
    }
    println!("✓ Saved {} products", CATALOG.len());

    for (id, quantity, cost) in PURCHASES {
        db.transactions().record_purchase(id, *quantity, *cost).await?;
    }
    println!("✓ Recorded {} purchases", PURCHASES.len());

    for (id, quantity) in ORDERS {
        db.transactions().record_order(id, *quantity).await?;
    }
    println!("✓ Recorded {} orders", ORDERS.len());

    println!();
    println!("Ledger summary:");
    for (id, name, _) in CATALOG {
        let history = db.transactions().list_for_product(id).await?;
        let value: f64 = history.iter().filter_map(|t| t.line_total()).sum();
        let on_hand = db.reports().quantity_of_product(id).await?;
        println!(
            "  {:<8} {:<18} on hand {:>4}   moved value {:>8.2}",
            id, name, on_hand, value
        );
    }

    let reports = db.reports();
    println!();
    println!(
        "  Fewest in stock: {}",
        reports.fewest_product().await?.unwrap_or_default()
    );
    println!(
        "  Most popular:    {}",
        reports.most_popular_product().await?.unwrap_or_default()
    );

    db.close().await;

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
