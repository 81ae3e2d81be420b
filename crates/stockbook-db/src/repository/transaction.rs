//! # Transaction Repository
//!
//! Records purchases and orders into the append-only stock ledger.
//!
//! ## Price Snapshot
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  record_purchase(A, 10, 5.0)                                            │
//! │     └── price supplied by the caller                                    │
//! │                                                                         │
//! │  record_order(A, 3)                                                     │
//! │     └── price = (SELECT product_price FROM products WHERE id = A)       │
//! │         resolved inside the INSERT, so the order keeps the catalog      │
//! │         price of that moment even if the product is re-saved later.     │
//! │         Unknown product → price is NULL, not an error.                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::{debug, warn};

use crate::error::DbResult;
use stockbook_core::{ProductTransaction, TransactionKind};

/// Repository for the `product_transactions` table.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    pool: SqlitePool,
}

impl TransactionRepository {
    /// Creates a new TransactionRepository.
    pub fn new(pool: SqlitePool) -> Self {
        TransactionRepository { pool }
    }

    /// Records inbound stock bought at `price` per unit.
    ///
    /// The product does not have to exist in the catalog.
    ///
    /// ## Returns
    /// The new `transaction_id`.
    pub async fn record_purchase(&self, product_id: &str, quantity: i64, price: f64) -> DbResult<i64> {
        debug!(product_id = %product_id, quantity, price, "Recording purchase");

        let result = sqlx::query(
            r#"
            INSERT INTO product_transactions (product_id, price, quantity, type)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(product_id)
        .bind(price)
        .bind(quantity)
        .bind(TransactionKind::Purchase)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Records an outbound sale at the product's current catalog price.
    ///
    /// ## Returns
    /// The new `transaction_id`.
    pub async fn record_order(&self, product_id: &str, quantity: i64) -> DbResult<i64> {
        debug!(product_id = %product_id, quantity, "Recording order");

        let (transaction_id, price): (i64, Option<f64>) = sqlx::query_as(
            r#"
            INSERT INTO product_transactions (product_id, price, quantity, type)
            VALUES (
                ?1,
                (SELECT product_price FROM products WHERE product_id = ?1),
                ?2,
                ?3
            )
            RETURNING transaction_id, price
            "#,
        )
        .bind(product_id)
        .bind(quantity)
        .bind(TransactionKind::Order)
        .fetch_one(&self.pool)
        .await?;

        if price.is_none() {
            warn!(
                product_id = %product_id,
                transaction_id,
                "Order recorded for a product missing from the catalog; price is unknown"
            );
        }

        Ok(transaction_id)
    }

    /// Lists every transaction of one product in insertion order.
    pub async fn list_for_product(&self, product_id: &str) -> DbResult<Vec<ProductTransaction>> {
        let transactions = sqlx::query_as::<_, ProductTransaction>(
            r#"
            SELECT transaction_id, product_id, price, quantity, type, created_at
            FROM product_transactions
            WHERE product_id = ?1
            ORDER BY transaction_id
            "#,
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(transactions)
    }

    /// Counts ledger rows of every product.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM product_transactions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
