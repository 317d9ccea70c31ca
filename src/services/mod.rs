//! Data-access services
//!
//! Each service hides whether it runs embedded (direct store access) or
//! remote (HTTP calls against the REST layer); the implementation is chosen
//! once, at composition time.

pub mod activities;
pub mod bookings;
pub mod products;
pub mod remote;
pub mod reports;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub products: products::ProductsService,
    pub bookings: bookings::BookingsService,
    pub reports: reports::ReportsService,
    pub activities: activities::ActivitiesService,
    /// Kept for infrastructure probes (health check)
    pub repository: Repository,
}

impl Services {
    /// Create all services embedded on the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            products: products::ProductsService::embedded(repository.products.clone()),
            bookings: bookings::BookingsService::embedded(repository.bookings.clone()),
            reports: reports::ReportsService::new(repository.clone()),
            activities: activities::ActivitiesService::new(repository.clone()),
            repository,
        }
    }
}
