//! # stockbook-core: Pure Domain Logic for Stockbook
//!
//! Domain types and ledger arithmetic with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockbook Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/cli (REPL)                              │   │
//! │  │    save_product, order_product, get_product_profit, ...        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               stockbook-db (Database Layer)                     │   │
//! │  │        SQLite queries, migrations, repositories, reports        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockbook-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐  ┌───────────────┐  ┌───────────────┐      │   │
//! │  │   │    types      │  │    ledger     │  │    error      │      │   │
//! │  │   │  Product      │  │  StockLevel   │  │  CoreError    │      │   │
//! │  │   │  Transaction  │  │  ProfitInputs │  │               │      │   │
//! │  │   └───────────────┘  └───────────────┘  └───────────────┘      │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductTransaction, OrderReportRow)
//! - [`ledger`] - Stock and profit arithmetic over aggregated sums
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use stockbook_core::ProfitInputs;
//!
//! let inputs = ProfitInputs {
//!     purchase_cost: Some(50.0),
//!     purchase_quantity: 10,
//!     order_revenue: Some(80.0),
//!     order_quantity: 10,
//! };
//!
//! assert_eq!(inputs.total_profit("A").unwrap(), 30.0);
//! ```

pub mod error;
pub mod ledger;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use ledger::{ProfitInputs, StockLevel};
pub use types::*;
