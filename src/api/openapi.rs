//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{activities, bookings, health, products, reports};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bounce Kingdom API",
        version = "1.0.0",
        description = "Party rental business management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "Bounce Kingdom Team", email = "contact@bouncekingdom.com")
    ),
    paths(
        // Health
        health::health_check,
        // Products
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
        // Bookings
        bookings::list_bookings,
        bookings::get_booking,
        bookings::create_booking,
        bookings::update_booking,
        bookings::delete_booking,
        // Reports
        reports::list_reports,
        reports::revenue_report,
        reports::bookings_report,
        reports::equipment_utilization_report,
        reports::generate_reports,
        // Activities
        activities::list_activities,
        activities::get_activity,
        activities::create_activity,
    ),
    components(
        schemas(
            // Products
            crate::models::product::Product,
            crate::models::product::ProductSpecs,
            crate::models::product::CreateProduct,
            crate::models::product::UpdateProduct,
            crate::models::enums::ProductCategory,
            crate::models::enums::ProductStatus,
            // Bookings
            crate::models::booking::Booking,
            crate::models::booking::Customer,
            crate::models::booking::ProductSnapshot,
            crate::models::booking::DurationOption,
            crate::models::booking::CreateBooking,
            crate::models::booking::UpdateBooking,
            crate::models::enums::BookingStatus,
            // Reports
            crate::models::report::Report,
            crate::models::report::GenerateReports,
            crate::models::enums::ReportType,
            crate::models::enums::ReportPeriod,
            // Activities
            crate::models::activity::CreateActivity,
            crate::models::activity::ActivityView,
            crate::models::activity::ActivityDetailView,
            // Health
            health::HealthResponse,
            // Shared
            crate::api::MessageResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "products", description = "Rental product catalog"),
        (name = "bookings", description = "Customer bookings"),
        (name = "reports", description = "Business report generation"),
        (name = "activities", description = "Audit activity log")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
