//! Reporting service
//!
//! Metrics are computed synchronously per request and persisted as new
//! report rows; generation is deliberately not idempotent (each call adds
//! a row, building a history).

use chrono::{DateTime, Duration, Months, Utc};
use serde_json::{json, Map};

use crate::{
    error::AppResult,
    models::enums::{ReportPeriod, ReportType},
    models::report::{NewReport, Report, ReportQuery},
    repository::Repository,
};

/// Start of the aggregation window ending at `end`
pub fn window_start(period: ReportPeriod, end: DateTime<Utc>) -> DateTime<Utc> {
    match period {
        ReportPeriod::Daily => end - Duration::days(1),
        ReportPeriod::Weekly => end - Duration::days(7),
        ReportPeriod::Monthly => end - Months::new(1),
        ReportPeriod::Yearly => end - Months::new(12),
    }
}

/// Share of products currently in use, as a whole percentage.
/// Zero products means zero utilization, not a division error.
pub fn utilization_percent(in_use: i64, total: i64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (in_use as f64 / total as f64 * 100.0).round()
}

#[derive(Clone)]
pub struct ReportsService {
    repository: Repository,
}

impl ReportsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Most recent persisted reports, optionally filtered
    pub async fn list(&self, query: &ReportQuery) -> AppResult<Vec<Report>> {
        self.repository.reports.list(query).await
    }

    /// Sum bookings revenue over the period window and persist the result
    pub async fn revenue(&self, period: ReportPeriod) -> AppResult<Report> {
        let end = Utc::now();
        let start = window_start(period, end);

        let total_revenue = self.repository.bookings.revenue_between(start, end).await?;
        let booking_count = self.repository.bookings.count_between(start, end).await?;

        let mut metadata = Map::new();
        metadata.insert("bookingCount".to_string(), json!(booking_count));
        metadata.insert("currency".to_string(), json!("GHS"));

        self.repository
            .reports
            .insert(NewReport {
                report_type: ReportType::Revenue,
                period,
                date: end,
                value: total_revenue,
                metadata,
            })
            .await
    }

    /// Count bookings over the period window and persist the result
    pub async fn bookings(&self, period: ReportPeriod) -> AppResult<Report> {
        let end = Utc::now();
        let start = window_start(period, end);

        let booking_count = self.repository.bookings.count_between(start, end).await?;

        self.repository
            .reports
            .insert(NewReport {
                report_type: ReportType::Bookings,
                period,
                date: end,
                value: booking_count as f64,
                metadata: Map::new(),
            })
            .await
    }

    /// Persist the current in-use percentage of the product fleet
    pub async fn equipment_utilization(&self, period: ReportPeriod) -> AppResult<Report> {
        let counts = self.repository.products.status_counts().await?;
        let value = utilization_percent(counts.in_use, counts.total);

        let mut metadata = Map::new();
        metadata.insert("totalProducts".to_string(), json!(counts.total));
        metadata.insert("inUseProducts".to_string(), json!(counts.in_use));

        self.repository
            .reports
            .insert(NewReport {
                report_type: ReportType::EquipmentUtilization,
                period,
                date: Utc::now(),
                value,
                metadata,
            })
            .await
    }

    /// Generate all three metrics for one period
    pub async fn generate_all(&self, period: ReportPeriod) -> AppResult<Vec<Report>> {
        let revenue = self.revenue(period).await?;
        let bookings = self.bookings(period).await?;
        let utilization = self.equipment_utilization(period).await?;
        Ok(vec![revenue, bookings, utilization])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn daily_and_weekly_windows_subtract_fixed_days() {
        let end = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        assert_eq!(
            window_start(ReportPeriod::Daily, end),
            Utc.with_ymd_and_hms(2024, 3, 14, 12, 0, 0).unwrap()
        );
        assert_eq!(
            window_start(ReportPeriod::Weekly, end),
            Utc.with_ymd_and_hms(2024, 3, 8, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn monthly_and_yearly_windows_subtract_calendar_units() {
        let end = Utc.with_ymd_and_hms(2024, 3, 31, 0, 0, 0).unwrap();
        // Calendar-month subtraction clamps to the end of February.
        assert_eq!(
            window_start(ReportPeriod::Monthly, end),
            Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap()
        );
        assert_eq!(
            window_start(ReportPeriod::Yearly, end),
            Utc.with_ymd_and_hms(2023, 3, 31, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn utilization_with_no_products_is_zero() {
        assert_eq!(utilization_percent(0, 0), 0.0);
    }

    #[test]
    fn utilization_rounds_to_whole_percent() {
        assert_eq!(utilization_percent(1, 4), 25.0);
        assert_eq!(utilization_percent(1, 3), 33.0);
        assert_eq!(utilization_percent(2, 3), 67.0);
        assert_eq!(utilization_percent(3, 3), 100.0);
    }
}
