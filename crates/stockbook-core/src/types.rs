//! # Domain Types
//!
//! Core domain types used throughout Stockbook.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────┐   ┌─────────────────┐  │
//! │  │    Product      │   │  ProductTransaction  │   │ OrderReportRow  │  │
//! │  │  ─────────────  │   │  ──────────────────  │   │  ─────────────  │  │
//! │  │  product_id     │◄──│  product_id          │   │  product_id     │  │
//! │  │  product_name   │   │  price (nullable)    │   │  product_name   │  │
//! │  │  product_price  │   │  quantity            │   │  quantity       │  │
//! │  └─────────────────┘   │  kind                │   │  price / cogs   │  │
//! │                        │  created_at          │   │  selling_price  │  │
//! │                        └──────────────────────┘   └─────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The reference from a transaction to its product is not enforced: orders
//! and purchases may name a product that was never saved.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Product
// =============================================================================

/// A catalog entry.
///
/// `product_price` is the list price copied into every order recorded
/// while it is current. Purchases carry their own price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Business identifier chosen by the shop (primary key).
    pub product_id: String,

    /// Display name.
    pub product_name: String,

    /// Catalog price per unit.
    pub product_price: f64,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Product {
            product_id: id.into(),
            product_name: name.into(),
            product_price: price,
        }
    }
}

// =============================================================================
// Transaction Kind
// =============================================================================

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Inbound stock bought from a supplier.
    Purchase,
    /// Outbound sale to a customer.
    Order,
}

impl TransactionKind {
    /// Returns the value stored in the `type` column.
    pub const fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Purchase => "purchase",
            TransactionKind::Order => "order",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Product Transaction
// =============================================================================

/// One append-only row of the stock ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ProductTransaction {
    /// Auto-incrementing row id.
    pub transaction_id: i64,

    /// Product this movement belongs to.
    pub product_id: String,

    /// Unit price. Supplied for purchases; copied from the catalog for
    /// orders, which leaves it empty when the product was never saved.
    pub price: Option<f64>,

    /// Units moved.
    pub quantity: i64,

    /// Purchase or order.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "type"))]
    pub kind: TransactionKind,

    /// Insertion time, set by the database.
    pub created_at: DateTime<Utc>,
}

impl ProductTransaction {
    /// Returns `price * quantity`, or `None` when the price is unknown.
    pub fn line_total(&self) -> Option<f64> {
        self.price.map(|price| price * self.quantity as f64)
    }
}

// =============================================================================
// Orders Report
// =============================================================================

/// One line of the orders report.
///
/// Field names double as the CSV header when serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrderReportRow {
    #[serde(rename = "Product ID")]
    pub product_id: String,

    #[serde(rename = "Product Name")]
    pub product_name: String,

    #[serde(rename = "Quantity")]
    pub quantity: i64,

    /// Catalog price copied at order time.
    #[serde(rename = "Price")]
    pub price: Option<f64>,

    /// Quantity times the product's mean purchase price, as of report time.
    #[serde(rename = "COGS")]
    pub cogs: Option<f64>,

    /// Quantity times the order price.
    #[serde(rename = "Selling Price")]
    pub selling_price: Option<f64>,
}

impl OrderReportRow {
    /// Column titles, in field order.
    pub const HEADERS: [&'static str; 6] = [
        "Product ID",
        "Product Name",
        "Quantity",
        "Price",
        "COGS",
        "Selling Price",
    ];
}

// =============================================================================
// Unit Tests
// =============================================================================
