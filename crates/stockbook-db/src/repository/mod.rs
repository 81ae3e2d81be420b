//! # Repository Module
//!
//! Database repository implementations for Stockbook.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  REPL command                                                           │
//! │       │                                                                 │
//! │       │  db.transactions().record_order("A", 3)                         │
//! │       ▼                                                                 │
//! │  ┌──────────────────────┐  ┌──────────────────────┐  ┌───────────────┐ │
//! │  │  ProductRepository   │  │TransactionRepository │  │ReportRepository│ │
//! │  │  save, get_by_id     │  │record_purchase       │  │quantity, avg  │ │
//! │  │  list, count         │  │record_order, list    │  │profit, report │ │
//! │  └──────────┬───────────┘  └──────────┬───────────┘  └───────┬───────┘ │
//! │             │  writes                  │  writes              │ reads   │
//! │             ▼                          ▼                      ▼         │
//! │        products               product_transactions      both tables     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Catalog upserts and lookups
//! - [`transaction::TransactionRepository`] - Purchase and order recording
//! - [`report::ReportRepository`] - Read-only aggregate reports

pub mod product;
pub mod report;
pub mod transaction;
