//! # Product Repository
//!
//! Catalog operations. Products are upserted wholesale and never deleted.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use stockbook_core::Product;

/// Repository for the `products` table.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts or replaces a product.
    ///
    /// ## Upsert Semantics
    /// ```text
    /// save(A, "Apple", 1.0)   → products: A | Apple | 1.0
    /// save(A, "Apricot", 2.0) → products: A | Apricot | 2.0   (row replaced)
    /// ```
    /// Orders already recorded keep the price they were taken at.
    pub async fn save(&self, product: &Product) -> DbResult<()> {
        debug!(
            product_id = %product.product_id,
            price = product.product_price,
            "Saving product"
        );

        sqlx::query(
            r#"
            INSERT OR REPLACE INTO products (product_id, product_name, product_price)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&product.product_id)
        .bind(&product.product_name)
        .bind(product.product_price)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, product_id: &str) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT product_id, product_name, product_price
            FROM products
            WHERE product_id = ?1
            "#,
        )
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Lists the whole catalog, sorted by name.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT product_id, product_name, product_price
            FROM products
            ORDER BY product_name, product_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Counts catalog entries.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig};
    use stockbook_core::Product;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_save_and_get() {
        let db = test_db().await;
        let repo = db.products();

        repo.save(&Product::new("A", "Apple", 1.5)).await.unwrap();

        let product = repo.get_by_id("A").await.unwrap().unwrap();
        assert_eq!(product, Product::new("A", "Apple", 1.5));
        assert!(repo.get_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_is_idempotent() {
        let db = test_db().await;
        let repo = db.products();
        let apple = Product::new("A", "Apple", 1.5);

        repo.save(&apple).await.unwrap();
        repo.save(&apple).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);
        assert_eq!(repo.get_by_id("A").await.unwrap(), Some(apple));
    }

    #[tokio::test]
    async fn test_save_overwrites_whole_row() {
        let db = test_db().await;
        let repo = db.products();

        repo.save(&Product::new("A", "Apple", 1.5)).await.unwrap();
        repo.save(&Product::new("A", "Apricot", 2.25)).await.unwrap();

        let product = repo.get_by_id("A").await.unwrap().unwrap();
        assert_eq!(product.product_name, "Apricot");
        assert_eq!(product.product_price, 2.25);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_sorted_by_name() {
        let db = test_db().await;
        let repo = db.products();

        repo.save(&Product::new("2", "Banana", 0.5)).await.unwrap();
        repo.save(&Product::new("1", "Cherry", 3.0)).await.unwrap();
        repo.save(&Product::new("3", "Apple", 1.0)).await.unwrap();

        let names: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.product_name)
            .collect();
        assert_eq!(names, vec!["Apple", "Banana", "Cherry"]);
    }
}
