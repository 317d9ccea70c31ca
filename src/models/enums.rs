//! Shared domain enums (wire labels match the storefront payloads)

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// ProductCategory
// ---------------------------------------------------------------------------

/// Rental product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "product_category")]
pub enum ProductCategory {
    #[serde(rename = "Bounce House")]
    #[sqlx(rename = "Bounce House")]
    BounceHouse,
    #[serde(rename = "Water Slide")]
    #[sqlx(rename = "Water Slide")]
    WaterSlide,
    #[serde(rename = "Balloon Pit")]
    #[sqlx(rename = "Balloon Pit")]
    BalloonPit,
    #[serde(rename = "Combo Unit")]
    #[sqlx(rename = "Combo Unit")]
    ComboUnit,
    #[serde(rename = "Obstacle Course")]
    #[sqlx(rename = "Obstacle Course")]
    ObstacleCourse,
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ProductCategory::BounceHouse => "Bounce House",
            ProductCategory::WaterSlide => "Water Slide",
            ProductCategory::BalloonPit => "Balloon Pit",
            ProductCategory::ComboUnit => "Combo Unit",
            ProductCategory::ObstacleCourse => "Obstacle Course",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// ProductStatus
// ---------------------------------------------------------------------------

/// Availability status of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "product_status")]
pub enum ProductStatus {
    Available,
    #[serde(rename = "In Use")]
    #[sqlx(rename = "In Use")]
    InUse,
    Maintenance,
}

impl Default for ProductStatus {
    fn default() -> Self {
        ProductStatus::Available
    }
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ProductStatus::Available => "Available",
            ProductStatus::InUse => "In Use",
            ProductStatus::Maintenance => "Maintenance",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// BookingStatus
// ---------------------------------------------------------------------------

/// Booking lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "booking_status")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl Default for BookingStatus {
    fn default() -> Self {
        BookingStatus::Pending
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Cancelled => "Cancelled",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// ReportType
// ---------------------------------------------------------------------------

/// Kind of metric a report row carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "report_type", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ReportType {
    Revenue,
    Bookings,
    CustomerSatisfaction,
    EquipmentUtilization,
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ReportType::Revenue => "revenue",
            ReportType::Bookings => "bookings",
            ReportType::CustomerSatisfaction => "customer-satisfaction",
            ReportType::EquipmentUtilization => "equipment-utilization",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// ReportPeriod
// ---------------------------------------------------------------------------

/// Aggregation window for report generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "report_period", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Default for ReportPeriod {
    fn default() -> Self {
        ReportPeriod::Monthly
    }
}

impl std::fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ReportPeriod::Daily => "daily",
            ReportPeriod::Weekly => "weekly",
            ReportPeriod::Monthly => "monthly",
            ReportPeriod::Yearly => "yearly",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_round_trip() {
        let json = serde_json::to_string(&ProductCategory::BounceHouse).unwrap();
        assert_eq!(json, "\"Bounce House\"");
        let back: ProductCategory = serde_json::from_str("\"Obstacle Course\"").unwrap();
        assert_eq!(back, ProductCategory::ObstacleCourse);
    }

    #[test]
    fn category_outside_enumeration_is_rejected() {
        let result = serde_json::from_str::<ProductCategory>("\"Petting Zoo\"");
        assert!(result.is_err());
    }

    #[test]
    fn status_in_use_label() {
        let json = serde_json::to_string(&ProductStatus::InUse).unwrap();
        assert_eq!(json, "\"In Use\"");
    }

    #[test]
    fn report_type_labels() {
        assert_eq!(
            serde_json::to_string(&ReportType::EquipmentUtilization).unwrap(),
            "\"equipment-utilization\""
        );
        let back: ReportType = serde_json::from_str("\"customer-satisfaction\"").unwrap();
        assert_eq!(back, ReportType::CustomerSatisfaction);
    }

    #[test]
    fn period_labels_are_lowercase() {
        let back: ReportPeriod = serde_json::from_str("\"weekly\"").unwrap();
        assert_eq!(back, ReportPeriod::Weekly);
        assert!(serde_json::from_str::<ReportPeriod>("\"Weekly\"").is_err());
    }
}
