//! Product (rental inventory) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;

use super::enums::{ProductCategory, ProductStatus};

/// Physical specs sub-document
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductSpecs {
    pub dimensions: Option<String>,
    pub age_group: Option<String>,
    pub capacity: Option<String>,
}

/// Product record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-native record identifier
    pub id: Uuid,
    /// Numeric business key shown to customers
    pub product_id: i64,
    pub name: String,
    pub description: String,
    /// Inline-encoded image data (may be empty)
    pub image: String,
    #[schema(value_type = ProductSpecs)]
    pub specs: Json<ProductSpecs>,
    pub additional_specs: String,
    pub category: ProductCategory,
    pub status: ProductStatus,
    pub last_maintenance: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create product request
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    /// Business key; a random 4-digit one is assigned when absent
    pub product_id: Option<i64>,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[validate(length(max = 10000000, message = "image data is too large"))]
    pub image: Option<String>,
    pub specs: Option<ProductSpecs>,
    pub additional_specs: Option<String>,
    pub category: ProductCategory,
    pub status: Option<ProductStatus>,
    pub last_maintenance: Option<DateTime<Utc>>,
}

/// Update product request; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    pub product_id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = 10000000, message = "image data is too large"))]
    pub image: Option<String>,
    pub specs: Option<ProductSpecs>,
    pub additional_specs: Option<String>,
    pub category: Option<ProductCategory>,
    pub status: Option<ProductStatus>,
    pub last_maintenance: Option<DateTime<Utc>>,
}

impl UpdateProduct {
    /// Merge this partial update into an existing record
    pub fn apply_to(self, product: &mut Product) {
        if let Some(product_id) = self.product_id {
            product.product_id = product_id;
        }
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(image) = self.image {
            product.image = image;
        }
        if let Some(specs) = self.specs {
            product.specs = Json(specs);
        }
        if let Some(additional_specs) = self.additional_specs {
            product.additional_specs = additional_specs;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(status) = self.status {
            product.status = status;
        }
        if let Some(last_maintenance) = self.last_maintenance {
            product.last_maintenance = last_maintenance;
        }
    }
}

/// External product identifier: either the store-native UUID or the numeric
/// business key. Resolved once at the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductKey {
    Id(Uuid),
    ProductId(i64),
}

impl std::str::FromStr for ProductKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(id) = Uuid::parse_str(s) {
            return Ok(ProductKey::Id(id));
        }
        if let Ok(product_id) = s.parse::<i64>() {
            return Ok(ProductKey::ProductId(product_id));
        }
        Err(AppError::Validation(format!(
            "Invalid product identifier: {}",
            s
        )))
    }
}

impl std::fmt::Display for ProductKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductKey::Id(id) => write!(f, "{}", id),
            ProductKey::ProductId(product_id) => write!(f, "{}", product_id),
        }
    }
}
