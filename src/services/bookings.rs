//! Booking data-access service (see `products.rs` for the seam design)

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::booking::{Booking, CreateBooking, UpdateBooking},
    repository::bookings::BookingsRepository,
};

/// Read/write access to the booking collection
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Booking>>;
    async fn get(&self, id: Uuid) -> AppResult<Booking>;
    async fn create(&self, data: CreateBooking) -> AppResult<Booking>;
    async fn update(&self, id: Uuid, data: UpdateBooking) -> AppResult<Booking>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

#[async_trait]
impl BookingStore for BookingsRepository {
    async fn list(&self) -> AppResult<Vec<Booking>> {
        BookingsRepository::list(self).await
    }

    async fn get(&self, id: Uuid) -> AppResult<Booking> {
        BookingsRepository::get(self, id).await
    }

    async fn create(&self, data: CreateBooking) -> AppResult<Booking> {
        BookingsRepository::create(self, data).await
    }

    async fn update(&self, id: Uuid, data: UpdateBooking) -> AppResult<Booking> {
        BookingsRepository::update(self, id, data).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        BookingsRepository::delete(self, id).await
    }
}

#[derive(Clone)]
pub struct BookingsService {
    store: Arc<dyn BookingStore>,
}

impl BookingsService {
    pub fn embedded(repository: BookingsRepository) -> Self {
        Self {
            store: Arc::new(repository),
        }
    }

    pub fn with_store(store: Arc<dyn BookingStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Booking>> {
        self.store.list().await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Booking> {
        self.store.get(id).await
    }

    pub async fn create(&self, data: CreateBooking) -> AppResult<Booking> {
        self.store.create(data).await
    }

    pub async fn update(&self, id: Uuid, data: UpdateBooking) -> AppResult<Booking> {
        self.store.update(id, data).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.store.delete(id).await
    }
}
