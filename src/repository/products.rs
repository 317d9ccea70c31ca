//! Products repository

use rand::Rng;
use sqlx::types::Json;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::enums::ProductStatus,
    models::product::{CreateProduct, Product, ProductKey, UpdateProduct},
};

/// Total/in-use product counts, for the utilization report
#[derive(Debug, Clone, Copy)]
pub struct ProductStatusCounts {
    pub total: i64,
    pub in_use: i64,
}

#[derive(Clone)]
pub struct ProductsRepository {
    pool: Pool<Postgres>,
}

impl ProductsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all products, newest first
    pub async fn list(&self) -> AppResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, Product>(
            "SELECT * FROM products ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get a product by native id or numeric business key
    pub async fn get(&self, key: &ProductKey) -> AppResult<Product> {
        let row = match key {
            ProductKey::Id(id) => {
                sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
                    .bind(id)
                    .fetch_optional(&self.pool)
                    .await?
            }
            ProductKey::ProductId(product_id) => {
                sqlx::query_as::<_, Product>("SELECT * FROM products WHERE product_id = $1")
                    .bind(product_id)
                    .fetch_optional(&self.pool)
                    .await?
            }
        };
        row.ok_or_else(|| AppError::NotFound("Product not found".to_string()))
    }

    /// Create a product, filling in the storefront defaults
    pub async fn create(&self, data: CreateProduct) -> AppResult<Product> {
        let product_id = data
            .product_id
            .unwrap_or_else(|| rand::thread_rng().gen_range(1000..10000));
        let specs = Json(data.specs.unwrap_or_default());

        let row = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products
                (product_id, name, description, image, specs, additional_specs,
                 category, status, last_maintenance)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, NOW()))
            RETURNING *
            "#,
        )
        .bind(product_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.image.as_deref().unwrap_or(""))
        .bind(specs)
        .bind(data.additional_specs.as_deref().unwrap_or(""))
        .bind(data.category)
        .bind(data.status.unwrap_or_default())
        .bind(data.last_maintenance)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_write_error(e, "A product with this productId already exists"))?;
        Ok(row)
    }

    /// Merge a partial update into an existing product and persist it.
    /// Last writer wins; there is no optimistic versioning.
    pub async fn update(&self, key: &ProductKey, data: UpdateProduct) -> AppResult<Product> {
        let mut product = self.get(key).await?;
        data.apply_to(&mut product);

        let row = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products SET
                product_id = $1,
                name = $2,
                description = $3,
                image = $4,
                specs = $5,
                additional_specs = $6,
                category = $7,
                status = $8,
                last_maintenance = $9,
                updated_at = NOW()
            WHERE id = $10
            RETURNING *
            "#,
        )
        .bind(product.product_id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.image)
        .bind(&product.specs)
        .bind(&product.additional_specs)
        .bind(product.category)
        .bind(product.status)
        .bind(product.last_maintenance)
        .bind(product.id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_write_error(e, "A product with this productId already exists"))?;
        Ok(row)
    }

    /// Delete a product
    pub async fn delete(&self, key: &ProductKey) -> AppResult<()> {
        let result = match key {
            ProductKey::Id(id) => {
                sqlx::query("DELETE FROM products WHERE id = $1")
                    .bind(id)
                    .execute(&self.pool)
                    .await?
            }
            ProductKey::ProductId(product_id) => {
                sqlx::query("DELETE FROM products WHERE product_id = $1")
                    .bind(product_id)
                    .execute(&self.pool)
                    .await?
            }
        };
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Product not found".to_string()));
        }
        Ok(())
    }

    /// Count all products and those currently in use (for reports)
    pub async fn status_counts(&self) -> AppResult<ProductStatusCounts> {
        let (total, in_use): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*), COUNT(*) FILTER (WHERE status = $1) FROM products",
        )
        .bind(ProductStatus::InUse)
        .fetch_one(&self.pool)
        .await?;
        Ok(ProductStatusCounts { total, in_use })
    }
}
