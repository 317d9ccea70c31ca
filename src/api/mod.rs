//! API handlers for the REST endpoints

pub mod activities;
pub mod bookings;
pub mod health;
pub mod openapi;
pub mod products;
pub mod reports;

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::error::AppError;

/// Confirmation body for delete endpoints
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// JSON extractor that turns both deserialization failures and validation
/// failures into a 400 with itemized field messages.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::Validation(format_validation_errors(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Flatten nested validation errors into "field: message" items
fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();
    collect_messages("", errors, &mut messages);
    messages.sort();
    format!("Validation error: {}", messages.join(", "))
}

fn collect_messages(prefix: &str, errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    out.push(format!("{}: {}", path, message));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_messages(&path, nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_messages(&format!("{}[{}]", path, index), nested, out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::booking::{CreateBooking, Customer, ProductSnapshot};
    use chrono::Utc;

    #[test]
    fn validation_messages_name_every_violated_field() {
        let payload = CreateBooking {
            booking_id: String::new(),
            customer: Customer {
                name: String::new(),
                phone: String::new(),
                email: "nope".to_string(),
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
            total_amount: 0.0,
        };

        let errors = payload.validate().unwrap_err();
        let message = format_validation_errors(&errors);

        assert!(message.starts_with("Validation error: "));
        assert!(message.contains("bookingId: bookingId is required") || message.contains("booking_id"));
        assert!(message.contains("customer.name"));
        assert!(message.contains("customer.phone"));
        assert!(message.contains("customer.email"));
    }
}
