//! Product data-access service
//!
//! `ProductStore` is the single seam the rest of the system talks through.
//! Server-side wiring composes the embedded (sqlx) implementation; storefront
//! consumers compose the remote one from [`crate::services::remote`]. Failures
//! are always surfaced as typed errors; there is no placeholder-data fallback.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::product::{CreateProduct, Product, ProductKey, UpdateProduct},
    repository::products::ProductsRepository,
};

/// Read/write access to the product collection
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Product>>;
    async fn get(&self, key: &ProductKey) -> AppResult<Product>;
    async fn create(&self, data: CreateProduct) -> AppResult<Product>;
    async fn update(&self, key: &ProductKey, data: UpdateProduct) -> AppResult<Product>;
    async fn delete(&self, key: &ProductKey) -> AppResult<()>;
}

#[async_trait]
impl ProductStore for ProductsRepository {
    async fn list(&self) -> AppResult<Vec<Product>> {
        ProductsRepository::list(self).await
    }

    async fn get(&self, key: &ProductKey) -> AppResult<Product> {
        ProductsRepository::get(self, key).await
    }

    async fn create(&self, data: CreateProduct) -> AppResult<Product> {
        ProductsRepository::create(self, data).await
    }

    async fn update(&self, key: &ProductKey, data: UpdateProduct) -> AppResult<Product> {
        ProductsRepository::update(self, key, data).await
    }

    async fn delete(&self, key: &ProductKey) -> AppResult<()> {
        ProductsRepository::delete(self, key).await
    }
}

#[derive(Clone)]
pub struct ProductsService {
    store: Arc<dyn ProductStore>,
}

impl ProductsService {
    /// Service backed by the database directly (server-side composition)
    pub fn embedded(repository: ProductsRepository) -> Self {
        Self {
            store: Arc::new(repository),
        }
    }

    /// Service backed by any other store implementation (remote client, mocks)
    pub fn with_store(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Product>> {
        self.store.list().await
    }

    pub async fn get(&self, key: &ProductKey) -> AppResult<Product> {
        self.store.get(key).await
    }

    pub async fn create(&self, data: CreateProduct) -> AppResult<Product> {
        self.store.create(data).await
    }

    pub async fn update(&self, key: &ProductKey, data: UpdateProduct) -> AppResult<Product> {
        self.store.update(key, data).await
    }

    pub async fn delete(&self, key: &ProductKey) -> AppResult<()> {
        self.store.delete(key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[tokio::test]
    async fn store_failures_propagate_to_the_caller() {
        // No placeholder-data substitution: a failing store means a failing call.
        let mut store = MockProductStore::new();
        store
            .expect_list()
            .returning(|| Err(AppError::Transport("connection refused".to_string())));

        let service = ProductsService::with_store(Arc::new(store));
        let result = service.list().await;
        assert!(matches!(result, Err(AppError::Transport(_))));
    }

    #[tokio::test]
    async fn delete_missing_product_is_not_found() {
        let mut store = MockProductStore::new();
        store
            .expect_delete()
            .returning(|_| Err(AppError::NotFound("Product not found".to_string())));

        let service = ProductsService::with_store(Arc::new(store));
        let result = service.delete(&ProductKey::ProductId(9999)).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
