//! # Ledger Arithmetic
//!
//! Pure calculations over the sums the report queries return.
//!
//! ## Profit Derivation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       get_product_profit                                │
//! │                                                                         │
//! │  purchases: Σ(price × qty) = cost      Σ qty = bought                   │
//! │  orders:    Σ(price × qty) = revenue   Σ qty = sold                     │
//! │                                                                         │
//! │  avg_purchase = cost / bought          (bought = 0 → DivisionByZero)    │
//! │  avg_order    = revenue / sold         (sold = 0   → DivisionByZero)    │
//! │  any unpriced row of that kind         (total unknown → MissingPrice)   │
//! │                                                                         │
//! │  profit = (avg_order − avg_purchase) × sold                             │
//! │                                                                         │
//! │  Example: bought 10 @ 5, sold 10 @ 8                                    │
//! │           (8.0 − 5.0) × 10 = 30.0                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::TransactionKind;

// =============================================================================
// Stock Level
// =============================================================================

/// Purchased and ordered unit totals for one product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct StockLevel {
    pub purchased: i64,
    pub ordered: i64,
}

impl StockLevel {
    /// Stock on hand. Negative when more was sold than bought.
    #[inline]
    pub fn remaining(&self) -> i64 {
        self.purchased - self.ordered
    }

    /// Whether more units were ordered than purchased.
    #[inline]
    pub fn is_oversold(&self) -> bool {
        self.remaining() < 0
    }
}

// =============================================================================
// Profit
// =============================================================================

/// The four sums profit is derived from.
///
/// A money total is `None` when at least one row of that kind has no price
/// (an order recorded for a product missing from the catalog). The total is
/// then unknown rather than a partial sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ProfitInputs {
    /// Σ(price × quantity) over purchases.
    pub purchase_cost: Option<f64>,
    /// Σ quantity over purchases.
    pub purchase_quantity: i64,
    /// Σ(price × quantity) over orders.
    pub order_revenue: Option<f64>,
    /// Σ quantity over orders.
    pub order_quantity: i64,
}

impl ProfitInputs {
    /// Mean price paid per purchased unit.
    pub fn average_purchase_price(&self, product_id: &str) -> CoreResult<f64> {
        unit_price(
            product_id,
            TransactionKind::Purchase,
            self.purchase_cost,
            self.purchase_quantity,
        )
    }

    /// Mean price charged per ordered unit.
    pub fn average_order_price(&self, product_id: &str) -> CoreResult<f64> {
        unit_price(
            product_id,
            TransactionKind::Order,
            self.order_revenue,
            self.order_quantity,
        )
    }

    /// Total profit over every ordered unit.
    ///
    /// ## Errors
    /// - `CoreError::DivisionByZero` when the product has no purchased or no
    ///   ordered quantity
    /// - `CoreError::MissingPrice` when a purchase or order has no price
    pub fn total_profit(&self, product_id: &str) -> CoreResult<f64> {
        let purchase_price = self.average_purchase_price(product_id)?;
        let order_price = self.average_order_price(product_id)?;
        let per_unit = order_price - purchase_price;
        Ok(per_unit * self.order_quantity as f64)
    }
}

fn unit_price(
    product_id: &str,
    kind: TransactionKind,
    total: Option<f64>,
    quantity: i64,
) -> CoreResult<f64> {
    if quantity == 0 {
        return Err(CoreError::DivisionByZero {
            product_id: product_id.to_string(),
            kind,
        });
    }

    let total = total.ok_or_else(|| CoreError::MissingPrice {
        product_id: product_id.to_string(),
        kind,
    })?;

    Ok(total / quantity as f64)
}

// =============================================================================
// Unit Tests
// =============================================================================
