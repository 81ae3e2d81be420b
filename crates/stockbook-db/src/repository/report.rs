//! # Report Repository
//!
//! Read-only aggregates over the stock ledger.
//!
//! ## Reports
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Report                  Source                  Empty result           │
//! │  ──────────────────────  ──────────────────────  ─────────────────────  │
//! │  quantity_of_product     Σ purchase − Σ order    0                      │
//! │  average_price           Σ(p×q) / Σq purchases   None                   │
//! │  product_profit          ProfitInputs (core)     DivisionByZero error   │
//! │  fewest_product          remaining ≥ 0, min      None                   │
//! │  most_popular_product    COUNT(order) max        None                   │
//! │  orders_report           one row per order       empty Vec              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `fewest_product`, `most_popular_product` and `orders_report` join the
//! catalog, so ledger rows of products that were never saved are left out.
//! Ties in the two ranking reports go to the alphabetically first name.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use stockbook_core::{OrderReportRow, ProfitInputs, StockLevel};

/// Repository for aggregate reports.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: SqlitePool,
}

impl ReportRepository {
    /// Creates a new ReportRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReportRepository { pool }
    }

    /// Purchased and ordered unit totals for one product.
    pub async fn stock_level(&self, product_id: &str) -> DbResult<StockLevel> {
        let level = sqlx::query_as::<_, StockLevel>(
            r#"
            SELECT
                CAST(COALESCE(SUM(CASE WHEN type = 'purchase' THEN quantity END), 0) AS INTEGER) AS purchased,
                CAST(COALESCE(SUM(CASE WHEN type = 'order' THEN quantity END), 0) AS INTEGER) AS ordered
            FROM product_transactions
            WHERE product_id = ?1
            "#,
        )
        .bind(product_id)
        .fetch_one(&self.pool)
        .await?;

        debug!(product_id = %product_id, ?level, "Stock level");
        Ok(level)
    }

    /// Stock on hand: purchased minus ordered. May be negative.
    pub async fn quantity_of_product(&self, product_id: &str) -> DbResult<i64> {
        Ok(self.stock_level(product_id).await?.remaining())
    }

    /// Quantity-weighted average purchase price.
    ///
    /// ## Returns
    /// * `Ok(Some(avg))` - Σ(price × quantity) / Σ quantity over purchases
    /// * `Ok(None)` - No purchases (or they sum to zero units)
    pub async fn average_price(&self, product_id: &str) -> DbResult<Option<f64>> {
        // SQLite yields NULL for both an empty SUM and a division by zero.
        let average: Option<f64> = sqlx::query_scalar(
            r#"
            SELECT CAST(SUM(price * quantity) AS REAL) / SUM(quantity)
            FROM product_transactions
            WHERE product_id = ?1 AND type = 'purchase'
            "#,
        )
        .bind(product_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(average)
    }

    /// The sums profit is derived from.
    ///
    /// Absent quantities read as zero. A money total is NULL when any row
    /// of its kind has a NULL price.
    pub async fn profit_inputs(&self, product_id: &str) -> DbResult<ProfitInputs> {
        let inputs = sqlx::query_as::<_, ProfitInputs>(
            r#"
            SELECT
                CASE WHEN COUNT(CASE WHEN type = 'purchase' AND price IS NULL THEN 1 END) > 0 THEN NULL
                     ELSE CAST(COALESCE(SUM(CASE WHEN type = 'purchase' THEN price * quantity END), 0) AS REAL)
                END AS purchase_cost,
                CAST(COALESCE(SUM(CASE WHEN type = 'purchase' THEN quantity END), 0) AS INTEGER) AS purchase_quantity,
                CASE WHEN COUNT(CASE WHEN type = 'order' AND price IS NULL THEN 1 END) > 0 THEN NULL
                     ELSE CAST(COALESCE(SUM(CASE WHEN type = 'order' THEN price * quantity END), 0) AS REAL)
                END AS order_revenue,
                CAST(COALESCE(SUM(CASE WHEN type = 'order' THEN quantity END), 0) AS INTEGER) AS order_quantity
            FROM product_transactions
            WHERE product_id = ?1
            "#,
        )
        .bind(product_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(inputs)
    }

    /// Total profit over every ordered unit.
    ///
    /// ## Errors
    /// `DbError::Ledger(DivisionByZero)` when the product was never
    /// purchased or never ordered.
    pub async fn product_profit(&self, product_id: &str) -> DbResult<f64> {
        let inputs = self.profit_inputs(product_id).await?;
        debug!(product_id = %product_id, ?inputs, "Profit inputs");

        Ok(inputs.total_profit(product_id)?)
    }

    /// Name of the product with the smallest non-negative stock.
    ///
    /// Oversold products (negative remaining) are skipped.
    pub async fn fewest_product(&self) -> DbResult<Option<String>> {
        let row: Option<(String, i64)> = sqlx::query_as(
            r#"
            SELECT
                p.product_name,
                CAST(SUM(CASE WHEN pt.type = 'purchase' THEN pt.quantity ELSE -pt.quantity END) AS INTEGER)
                    AS remaining_quantity
            FROM products p
            JOIN product_transactions pt ON p.product_id = pt.product_id
            GROUP BY p.product_id, p.product_name
            HAVING remaining_quantity >= 0
            ORDER BY remaining_quantity ASC, p.product_name ASC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        debug!(?row, "Fewest product");
        Ok(row.map(|(name, _)| name))
    }

    /// Name of the product with the most order transactions.
    ///
    /// Counts order rows, not units.
    pub async fn most_popular_product(&self) -> DbResult<Option<String>> {
        let row: Option<(String, i64)> = sqlx::query_as(
            r#"
            SELECT
                p.product_name,
                COUNT(*) AS order_count
            FROM products p
            JOIN product_transactions pt ON p.product_id = pt.product_id
            WHERE pt.type = 'order'
            GROUP BY p.product_id, p.product_name
            ORDER BY order_count DESC, p.product_name ASC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        debug!(?row, "Most popular product");
        Ok(row.map(|(name, _)| name))
    }

    /// Every order with its cost of goods sold and selling price.
    ///
    /// ## Columns
    /// - `cogs` = quantity × mean purchase price of the product, evaluated
    ///   now (later purchases change the COGS of earlier orders)
    /// - `selling_price` = quantity × order price
    ///
    /// Rows come back in insertion order.
    pub async fn orders_report(&self) -> DbResult<Vec<OrderReportRow>> {
        let rows = sqlx::query_as::<_, OrderReportRow>(
            r#"
            SELECT
                pt.product_id AS product_id,
                p.product_name AS product_name,
                pt.quantity AS quantity,
                pt.price AS price,
                pt.quantity * (
                    SELECT AVG(purchase.price)
                    FROM product_transactions purchase
                    WHERE purchase.product_id = pt.product_id
                      AND purchase.type = 'purchase'
                ) AS cogs,
                pt.quantity * pt.price AS selling_price
            FROM product_transactions pt
            JOIN products p ON p.product_id = pt.product_id
            WHERE pt.type = 'order'
            ORDER BY pt.created_at ASC, pt.transaction_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Orders report built");
        Ok(rows)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
