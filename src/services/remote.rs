//! Remote data source: the REST-consuming implementation of the store traits
//!
//! This is what a storefront or any other out-of-process consumer composes
//! instead of the embedded sqlx repositories. Errors come back typed; an
//! unreachable server is a `Transport` error, never placeholder data.

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::booking::{Booking, CreateBooking, UpdateBooking},
    models::product::{CreateProduct, Product, ProductKey, UpdateProduct},
    services::bookings::BookingStore,
    services::products::ProductStore,
};

#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` is the server root, e.g. `http://localhost:5000`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> AppResult<T> {
        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| AppError::Internal(format!("Invalid response body: {}", e)));
        }

        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| body["message"].as_str().map(str::to_string))
            .unwrap_or_else(|| format!("HTTP {}", status));

        Err(match status {
            StatusCode::NOT_FOUND => AppError::NotFound(message),
            StatusCode::BAD_REQUEST => AppError::Validation(message),
            _ => AppError::Internal(message),
        })
    }

    fn transport(e: reqwest::Error) -> AppError {
        AppError::Transport(e.to_string())
    }
}

#[async_trait]
impl ProductStore for ApiClient {
    async fn list(&self) -> AppResult<Vec<Product>> {
        let response = self
            .client
            .get(self.url("/api/products"))
            .send()
            .await
            .map_err(Self::transport)?;
        Self::decode(response).await
    }

    async fn get(&self, key: &ProductKey) -> AppResult<Product> {
        let response = self
            .client
            .get(self.url(&format!("/api/products/{}", key)))
            .send()
            .await
            .map_err(Self::transport)?;
        Self::decode(response).await
    }

    async fn create(&self, data: CreateProduct) -> AppResult<Product> {
        let response = self
            .client
            .post(self.url("/api/products"))
            .json(&data)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::decode(response).await
    }

    async fn update(&self, key: &ProductKey, data: UpdateProduct) -> AppResult<Product> {
        let response = self
            .client
            .put(self.url(&format!("/api/products/{}", key)))
            .json(&data)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::decode(response).await
    }

    async fn delete(&self, key: &ProductKey) -> AppResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/products/{}", key)))
            .send()
            .await
            .map_err(Self::transport)?;
        // The body is only a confirmation message.
        Self::decode::<serde_json::Value>(response).await.map(|_| ())
    }
}

#[async_trait]
impl BookingStore for ApiClient {
    async fn list(&self) -> AppResult<Vec<Booking>> {
        let response = self
            .client
            .get(self.url("/api/bookings"))
            .send()
            .await
            .map_err(Self::transport)?;
        Self::decode(response).await
    }

    async fn get(&self, id: Uuid) -> AppResult<Booking> {
        let response = self
            .client
            .get(self.url(&format!("/api/bookings/{}", id)))
            .send()
            .await
            .map_err(Self::transport)?;
        Self::decode(response).await
    }

    async fn create(&self, data: CreateBooking) -> AppResult<Booking> {
        let response = self
            .client
            .post(self.url("/api/bookings"))
            .json(&data)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::decode(response).await
    }

    async fn update(&self, id: Uuid, data: UpdateBooking) -> AppResult<Booking> {
        let response = self
            .client
            .put(self.url(&format!("/api/bookings/{}", id)))
            .json(&data)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::decode(response).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/bookings/{}", id)))
            .send()
            .await
            .map_err(Self::transport)?;
        Self::decode::<serde_json::Value>(response).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::products::ProductsService;
    use std::sync::Arc;

    #[tokio::test]
    async fn unreachable_server_surfaces_as_transport_error() {
        // TCP port 9 (discard) is not listening in any sane test environment.
        let client = ApiClient::new("http://127.0.0.1:9");
        let service = ProductsService::with_store(Arc::new(client));

        let result = service.list().await;
        assert!(matches!(result, Err(AppError::Transport(_))));
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new("http://localhost:5000/");
        assert_eq!(
            client.url("/api/products"),
            "http://localhost:5000/api/products"
        );
    }
}
