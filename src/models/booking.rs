//! Booking model and related types
//!
//! `customer` and `product` are denormalized snapshots taken at booking
//! time: later edits to a Product never propagate to past Bookings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::enums::BookingStatus;

/// Customer contact sub-document
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[validate(length(min = 1, message = "customer name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "customer phone is required"))]
    pub phone: String,
    #[validate(email(message = "customer email is invalid"))]
    pub email: String,
}

/// Snapshot of the booked product (business key + display name)
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductSnapshot {
    pub id: i64,
    #[validate(length(min = 1, message = "product name is required"))]
    pub name: String,
}

/// Selected rental duration option
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DurationOption {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl Default for DurationOption {
    fn default() -> Self {
        Self {
            id: "4-hours".to_string(),
            name: "4 Hours".to_string(),
            price: 150.0,
        }
    }
}

/// Booking record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    /// Application-assigned unique booking reference
    pub booking_id: String,
    #[schema(value_type = Customer)]
    pub customer: Json<Customer>,
    #[schema(value_type = ProductSnapshot)]
    pub product: Json<ProductSnapshot>,
    pub date: DateTime<Utc>,
    pub time: String,
    #[schema(value_type = DurationOption)]
    pub duration: Json<DurationOption>,
    pub address: String,
    pub status: BookingStatus,
    pub total_amount: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create booking request
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    #[validate(length(min = 1, message = "bookingId is required"))]
    pub booking_id: String,
    #[validate(nested)]
    pub customer: Customer,
    #[validate(nested)]
    pub product: ProductSnapshot,
    pub date: DateTime<Utc>,
    pub time: Option<String>,
    pub duration: Option<DurationOption>,
    pub address: Option<String>,
    pub status: Option<BookingStatus>,
    pub total_amount: f64,
}

/// Update booking request; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBooking {
    pub booking_id: Option<String>,
    #[validate(nested)]
    pub customer: Option<Customer>,
    #[validate(nested)]
    pub product: Option<ProductSnapshot>,
    pub date: Option<DateTime<Utc>>,
    pub time: Option<String>,
    pub duration: Option<DurationOption>,
    pub address: Option<String>,
    pub status: Option<BookingStatus>,
    pub total_amount: Option<f64>,
}

impl UpdateBooking {
    /// Merge this partial update into an existing record
    pub fn apply_to(self, booking: &mut Booking) {
        if let Some(booking_id) = self.booking_id {
            booking.booking_id = booking_id;
        }
        if let Some(customer) = self.customer {
            booking.customer = Json(customer);
        }
        if let Some(product) = self.product {
            booking.product = Json(product);
        }
        if let Some(date) = self.date {
            booking.date = date;
        }
        if let Some(time) = self.time {
            booking.time = time;
        }
        if let Some(duration) = self.duration {
            booking.duration = Json(duration);
        }
        if let Some(address) = self.address {
            booking.address = address;
        }
        if let Some(status) = self.status {
            booking.status = status;
        }
        if let Some(total_amount) = self.total_amount {
            booking.total_amount = total_amount;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_booking() -> Booking {
        Booking {
            id: Uuid::new_v4(),
            booking_id: "BK-2024-0001".to_string(),
            customer: Json(Customer {
                name: "Ama Mensah".to_string(),
                phone: "+233201234567".to_string(),
                email: "ama@example.com".to_string(),
            }),
            product: Json(ProductSnapshot {
                id: 2,
                name: "Tropical Thunder Water Slide".to_string(),
            }),
            date: Utc::now(),
            time: "10:00".to_string(),
            duration: Json(DurationOption::default()),
            address: "12 Ridge Road, Accra".to_string(),
            status: BookingStatus::Pending,
            total_amount: 150.0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn status_only_update_leaves_other_fields_unchanged() {
        let mut booking = sample_booking();
        let original = booking.clone();

        let update: UpdateBooking =
            serde_json::from_str(r#"{"status": "Confirmed"}"#).unwrap();
        update.apply_to(&mut booking);

        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.booking_id, original.booking_id);
        assert_eq!(booking.customer.0.name, original.customer.0.name);
        assert_eq!(booking.product.0.id, original.product.0.id);
        assert_eq!(booking.total_amount, original.total_amount);
        assert_eq!(booking.address, original.address);
    }

    #[test]
    fn product_snapshot_is_not_a_live_reference() {
        // The snapshot only carries the business key and the name captured
        // at booking time; there is nothing to dereference later.
        let booking = sample_booking();
        let json = serde_json::to_value(&booking).unwrap();
        assert_eq!(json["product"]["id"], 2);
        assert_eq!(json["product"]["name"], "Tropical Thunder Water Slide");
    }

    #[test]
    fn create_requires_customer_fields() {
        use validator::Validate;
        let payload = CreateBooking {
            booking_id: "BK-1".to_string(),
            customer: Customer {
                name: String::new(),
                phone: "+233200000000".to_string(),
                email: "not-an-email".to_string(),
            },
            product: ProductSnapshot {
                id: 1,
                name: "Pirate Ship".to_string(),
            },
            date: Utc::now(),
            time: None,
            duration: None,
            address: None,
            status: None,
            total_amount: 150.0,
        };
        let err = payload.validate().unwrap_err();
        let field_errors = err.errors();
        assert!(field_errors.contains_key("customer"));
    }

    #[test]
    fn default_duration_is_four_hours() {
        let d = DurationOption::default();
        assert_eq!(d.id, "4-hours");
        assert_eq!(d.price, 150.0);
    }
}
