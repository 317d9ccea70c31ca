//! Product API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::product::{CreateProduct, Product, ProductKey, UpdateProduct},
};

use super::{MessageResponse, ValidatedJson};

/// List all products, newest first
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "products",
    responses(
        (status = 200, description = "Product list", body = Vec<Product>)
    )
)]
pub async fn list_products(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Product>>> {
    let products = state.services.products.list().await?;
    Ok(Json(products))
}

/// Get a product by native id or numeric productId
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Native id (UUID) or numeric productId")),
    responses(
        (status = 200, description = "Product details", body = Product),
        (status = 404, description = "Product not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_product(
    State(state): State<crate::AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<Product>> {
    let key: ProductKey = key.parse()?;
    let product = state.services.products.get(&key).await?;
    Ok(Json(product))
}

/// Create a product
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Validation failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_product(
    State(state): State<crate::AppState>,
    ValidatedJson(data): ValidatedJson<CreateProduct>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = state.services.products.create(data).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Partially update a product; absent body fields are left unchanged
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Native id (UUID) or numeric productId")),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 404, description = "Product not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_product(
    State(state): State<crate::AppState>,
    Path(key): Path<String>,
    ValidatedJson(data): ValidatedJson<UpdateProduct>,
) -> AppResult<Json<Product>> {
    let key: ProductKey = key.parse()?;
    let product = state.services.products.update(&key, data).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Native id (UUID) or numeric productId")),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 404, description = "Product not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_product(
    State(state): State<crate::AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let key: ProductKey = key.parse()?;
    state.services.products.delete(&key).await?;
    Ok(Json(MessageResponse::new("Product removed")))
}
