//! Bookings repository

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::booking::{Booking, CreateBooking, DurationOption, UpdateBooking},
};

#[derive(Clone)]
pub struct BookingsRepository {
    pool: Pool<Postgres>,
}

impl BookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all bookings, newest first
    pub async fn list(&self) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get a booking by native id
    pub async fn get(&self, id: Uuid) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))
    }

    /// Create a booking, filling in the storefront defaults
    pub async fn create(&self, data: CreateBooking) -> AppResult<Booking> {
        let duration = Json(data.duration.unwrap_or_else(DurationOption::default));

        let row = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings
                (booking_id, customer, product, date, time, duration,
                 address, status, total_amount)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&data.booking_id)
        .bind(Json(&data.customer))
        .bind(Json(&data.product))
        .bind(data.date)
        .bind(data.time.as_deref().unwrap_or("10:00"))
        .bind(duration)
        .bind(data.address.as_deref().unwrap_or(""))
        .bind(data.status.unwrap_or_default())
        .bind(data.total_amount)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_write_error(e, "A booking with this bookingId already exists"))?;
        Ok(row)
    }

    /// Merge a partial update into an existing booking and persist it
    pub async fn update(&self, id: Uuid, data: UpdateBooking) -> AppResult<Booking> {
        let mut booking = self.get(id).await?;
        data.apply_to(&mut booking);

        let row = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings SET
                booking_id = $1,
                customer = $2,
                product = $3,
                date = $4,
                time = $5,
                duration = $6,
                address = $7,
                status = $8,
                total_amount = $9,
                updated_at = NOW()
            WHERE id = $10
            RETURNING *
            "#,
        )
        .bind(&booking.booking_id)
        .bind(&booking.customer)
        .bind(&booking.product)
        .bind(booking.date)
        .bind(&booking.time)
        .bind(&booking.duration)
        .bind(&booking.address)
        .bind(booking.status)
        .bind(booking.total_amount)
        .bind(booking.id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_write_error(e, "A booking with this bookingId already exists"))?;
        Ok(row)
    }

    /// Delete a booking
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Booking not found".to_string()));
        }
        Ok(())
    }

    /// Sum of totalAmount over bookings created inside the window
    pub async fn revenue_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<f64> {
        let revenue: f64 = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(total_amount), 0)::double precision
            FROM bookings
            WHERE created_at >= $1 AND created_at <= $2
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await?;
        Ok(revenue)
    }

    /// Number of bookings created inside the window
    pub async fn count_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM bookings WHERE created_at >= $1 AND created_at <= $2",
        )
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
