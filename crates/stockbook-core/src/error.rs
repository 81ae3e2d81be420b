//! # Error Types
//!
//! Domain errors for stockbook-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockbook-core (this file)                                            │
//! │  └── CoreError        - Ledger arithmetic failures                     │
//! │                                                                         │
//! │  stockbook-db                                                          │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  apps/cli                                                              │
//! │  └── CliError         - What the REPL prints as `Error: <message>`     │
//! │                                                                         │
//! │  Flow: CoreError / DbError → CliError → stdout                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::types::TransactionKind;

/// Domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An average over zero units was requested.
    ///
    /// ## When This Occurs
    /// - Profit for a product that was never purchased
    /// - Profit for a product that was never ordered
    #[error("division by zero: product {product_id} has no {kind} quantity")]
    DivisionByZero {
        product_id: String,
        kind: TransactionKind,
    },

    /// A money total includes a row whose price is NULL.
    ///
    /// ## When This Occurs
    /// - Profit for a product ordered while it was missing from the catalog
    #[error("missing price: product {product_id} has {kind} rows without a price")]
    MissingPrice {
        product_id: String,
        kind: TransactionKind,
    },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
